//! AWS Lambda handler for the investment calculator
//!
//! Accepts the calculator form fields as JSON, runs a daily projection, and
//! returns the rendered report including the CSV payload. A download route
//! re-serves previously generated CSV content verbatim as an attachment.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use investment_projector::{
    params::FormParams,
    projection::ProjectionEngine,
    report::{RenderedReport, DEFAULT_CSV_FILENAME},
};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(report: &RenderedReport) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, GET, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(report).unwrap()))
        .unwrap()
}

fn csv_attachment(filename: &str, content: String) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/csv")
        .header(
            "Content-Disposition",
            format!("attachment; filename={}", filename),
        )
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(content))
        .unwrap()
}

/// Serve the download route: the CSV content previously returned by the
/// projection response comes back via query parameter and is echoed as an
/// attachment without recomputation.
fn handle_download(event: &Request) -> Response<Body> {
    let filename = event
        .uri()
        .path()
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_CSV_FILENAME)
        .to_string();

    let content = event
        .query_string_parameters()
        .first("csv_content")
        .unwrap_or_default()
        .to_string();

    csv_attachment(&filename, content)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, GET, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    if event.method().as_str() == "GET" && event.uri().path().contains("/download_csv") {
        return Ok(handle_download(&event));
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let form: FormParams = match serde_json::from_str(&body_str) {
        Ok(f) => f,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let params = match form.parse() {
        Ok(p) => p,
        Err(e) => {
            return Ok(error_response(400, &e.to_string()));
        }
    };

    let currency = params.currency_symbol.clone();
    let rate = params.daily_interest_rate;

    let result = match ProjectionEngine::new(params).project() {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(422, &e.to_string()));
        }
    };

    let report = match RenderedReport::from_result(&result, &currency, rate) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(500, &e.to_string()));
        }
    };

    Ok(json_response(&report))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

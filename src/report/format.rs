//! Display formatting for the projection report

use chrono::NaiveDate;
use serde::Serialize;

use super::csv_export::{records_to_csv_string, DEFAULT_CSV_FILENAME};
use crate::error::Result;
use crate::projection::{DailyRecord, ProjectionResult};

/// Monetary amount with the currency symbol prefixed, to 2 decimals
pub fn money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Percentage value to 2 decimals with a trailing `%`
pub fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// A decimal fraction displayed as a percentage (0.01 -> "1.00%")
pub fn rate_percent(fraction: f64) -> String {
    percent(fraction * 100.0)
}

/// Report-style long date, e.g. "Aug 06, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// The fully rendered report: formatted summary strings, the record rows,
/// and the CSV payload for download
#[derive(Debug, Clone, Serialize)]
pub struct RenderedReport {
    pub initial_balance: String,
    pub investment_value: String,
    pub total_interest: String,
    pub additional_deposits: String,
    pub total_cash_taken_out: String,
    pub percentage_profit: String,
    pub daily_interest_rate: String,
    pub total_days: i64,
    pub business_days: i64,
    pub start_date: String,
    pub end_date: String,
    pub earnings_data: Vec<DailyRecord>,
    pub csv_filename: String,
    pub csv_content: String,
}

impl RenderedReport {
    /// Render a completed projection. `daily_interest_rate` is the same
    /// decimal fraction the engine ran with.
    pub fn from_result(
        result: &ProjectionResult,
        currency_symbol: &str,
        daily_interest_rate: f64,
    ) -> Result<Self> {
        let summary = &result.summary;
        Ok(Self {
            initial_balance: money(currency_symbol, summary.initial_balance),
            investment_value: money(currency_symbol, summary.final_balance),
            total_interest: money(currency_symbol, summary.total_interest),
            additional_deposits: money(currency_symbol, summary.total_deposits),
            total_cash_taken_out: money(currency_symbol, summary.total_cash_taken_out),
            percentage_profit: percent(summary.percentage_profit),
            daily_interest_rate: rate_percent(daily_interest_rate),
            total_days: summary.total_days,
            business_days: summary.business_days,
            start_date: long_date(summary.start_date),
            end_date: long_date(summary.end_date),
            earnings_data: result.records.clone(),
            csv_filename: DEFAULT_CSV_FILENAME.to_string(),
            csv_content: records_to_csv_string(&result.records)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ProjectionParams;
    use crate::projection::ProjectionEngine;

    #[test]
    fn test_money_and_percent_formats() {
        assert_eq!(money("$", 1010.0), "$1010.00");
        assert_eq!(money("€", 0.5), "€0.50");
        assert_eq!(percent(1.0), "1.00%");
        assert_eq!(percent(12.3456), "12.35%");
        assert_eq!(rate_percent(0.01), "1.00%");
    }

    #[test]
    fn test_long_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(long_date(date), "Aug 06, 2026");
    }

    #[test]
    fn test_rendered_report_matches_run() {
        let params = ProjectionParams {
            initial_balance: 1000.0,
            daily_interest_rate: 0.01,
            days: 1,
            daily_reinvest_rate: 1.0,
            ..Default::default()
        };
        let rate = params.daily_interest_rate;
        let symbol = params.currency_symbol.clone();
        let result = ProjectionEngine::new(params)
            .project_from(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap())
            .unwrap();

        let report = RenderedReport::from_result(&result, &symbol, rate).unwrap();

        assert_eq!(report.initial_balance, "$1000.00");
        assert_eq!(report.investment_value, "$1010.00");
        assert_eq!(report.total_interest, "$10.00");
        assert_eq!(report.percentage_profit, "1.00%");
        assert_eq!(report.daily_interest_rate, "1.00%");
        assert_eq!(report.start_date, "Aug 06, 2026");
        assert_eq!(report.end_date, "Aug 07, 2026");
        assert_eq!(report.earnings_data.len(), 1);
        assert_eq!(report.csv_filename, "earnings_data.csv");
        assert!(report
            .csv_content
            .starts_with("Date,Balance,Daily Interest"));
        assert!(report.csv_content.contains("2026-08-06,1010.00"));
    }
}

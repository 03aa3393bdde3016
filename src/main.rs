//! Investment Projector CLI
//!
//! Command-line interface for running daily compound interest projections

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use investment_projector::{
    params::{ContributionMode, ProjectionParams},
    projection::ProjectionEngine,
    report,
};

/// Rate arguments are percentages, matching the web form; they are scaled
/// to fractions before the engine runs.
#[derive(Debug, Parser)]
#[command(name = "investment_projector", version, about = "Day-by-day compound interest projection")]
struct Cli {
    /// Starting balance
    #[arg(long)]
    initial_balance: f64,

    /// Currency symbol for displayed amounts
    #[arg(long, default_value = "$")]
    currency: String,

    /// Daily interest rate in percent
    #[arg(long)]
    interest_rate: f64,

    /// Duration days component
    #[arg(long, default_value_t = 0)]
    days: i64,

    /// Duration months component (30 days each)
    #[arg(long, default_value_t = 0)]
    months: i64,

    /// Duration years component (365 days each)
    #[arg(long, default_value_t = 0)]
    years: i64,

    /// Count every calendar day instead of 5 out of each 7
    #[arg(long)]
    include_all_days: bool,

    /// Percent of daily interest reinvested into the balance
    #[arg(long, default_value_t = 100.0)]
    reinvest_rate: f64,

    /// Recurring contribution mode: Deposits or Withdrawals
    #[arg(long, default_value = "None")]
    contributions: String,

    /// Amount applied once per counted day
    #[arg(long, default_value_t = 0.0)]
    contribution_amount: f64,

    /// Day index before which contributions do not apply
    #[arg(long, default_value_t = 0)]
    contribution_skip_days: i64,

    /// Percent of daily interest drawn down out of the system
    #[arg(long, default_value_t = 0.0)]
    drawdown: f64,

    /// Run-start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Path for the earnings CSV
    #[arg(long, default_value = "earnings_data.csv")]
    csv_out: PathBuf,
}

impl Cli {
    fn to_params(&self) -> ProjectionParams {
        ProjectionParams {
            initial_balance: self.initial_balance,
            currency_symbol: self.currency.clone(),
            daily_interest_rate: self.interest_rate / 100.0,
            days: self.days,
            months: self.months,
            years: self.years,
            include_all_days: self.include_all_days,
            daily_reinvest_rate: self.reinvest_rate / 100.0,
            contribution_mode: ContributionMode::from_form_value(&self.contributions),
            contribution_amount: self.contribution_amount,
            contribution_skip_days: self.contribution_skip_days,
            drawdown_rate: self.drawdown / 100.0,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.to_params();
    let currency = params.currency_symbol.clone();
    let rate = params.daily_interest_rate;

    let engine = ProjectionEngine::new(params);
    let result = match cli.start_date {
        Some(date) => engine.project_from(date),
        None => engine.project(),
    }?;

    println!("Investment Projector v{}", env!("CARGO_PKG_VERSION"));
    println!("=========================\n");

    println!("Projection Results ({} counted days):", result.records.len());
    println!(
        "{:>12} {:>14} {:>12} {:>12} {:>12} {:>12}",
        "Date", "Balance", "Interest", "Reinvested", "Drawdown", "Personal"
    );
    println!("{}", "-".repeat(80));

    // Print first 24 rows to console
    for row in result.records.iter().take(24) {
        println!(
            "{:>12} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            row.date.to_string(),
            row.balance,
            row.interest,
            row.reinvested,
            row.drawdown,
            row.personal,
        );
    }

    if result.records.len() > 24 {
        println!("... ({} more days)", result.records.len() - 24);
    }

    // Write full results to CSV
    let file = File::create(&cli.csv_out)
        .with_context(|| format!("unable to create {}", cli.csv_out.display()))?;
    report::write_records(&result.records, file)?;
    println!("\nFull results written to: {}", cli.csv_out.display());

    let summary = &result.summary;
    println!("\nSummary:");
    println!("  Start Date: {}", report::long_date(summary.start_date));
    println!("  End Date: {}", report::long_date(summary.end_date));
    println!("  Total Days: {}", summary.total_days);
    println!("  Business Days: {}", summary.business_days);
    println!("  Daily Interest Rate: {}", report::rate_percent(rate));
    println!("  Initial Balance: {}", report::money(&currency, summary.initial_balance));
    println!("  Final Balance: {}", report::money(&currency, summary.final_balance));
    println!("  Total Interest: {}", report::money(&currency, summary.total_interest));
    println!("  Additional Deposits: {}", report::money(&currency, summary.total_deposits));
    println!("  Cash Taken Out: {}", report::money(&currency, summary.total_cash_taken_out));
    println!("  Percentage Profit: {}", report::percent(summary.percentage_profit));

    Ok(())
}

//! Compare projection outcomes across a sweep of daily interest rates
//!
//! Usage: cargo run --bin compare_rates -- --initial-balance 10000 --months 6 --rates 0.5,1,2

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use investment_projector::{
    params::ProjectionParams,
    report,
    scenario::ScenarioRunner,
};

#[derive(Debug, Parser)]
#[command(name = "compare_rates", about = "Sweep daily interest rates over one parameter set")]
struct Cli {
    /// Starting balance
    #[arg(long)]
    initial_balance: f64,

    /// Currency symbol for displayed amounts
    #[arg(long, default_value = "$")]
    currency: String,

    /// Daily rates to compare, in percent, comma-separated
    #[arg(long, value_delimiter = ',', default_value = "0.5,1,2")]
    rates: Vec<f64>,

    /// Duration days component
    #[arg(long, default_value_t = 0)]
    days: i64,

    /// Duration months component (30 days each)
    #[arg(long, default_value_t = 1)]
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

    /// Run-start date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    start_date: Option<NaiveDate>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let base = ProjectionParams {
        initial_balance: cli.initial_balance,
        currency_symbol: cli.currency.clone(),
        days: cli.days,
        months: cli.months,
        years: cli.years,
        include_all_days: cli.include_all_days,
        daily_reinvest_rate: cli.reinvest_rate / 100.0,
        ..Default::default()
    };

    let runner = match cli.start_date {
        Some(date) => ScenarioRunner::with_start_date(base, date),
        None => ScenarioRunner::new(base),
    };

    let fractions: Vec<f64> = cli.rates.iter().map(|r| r / 100.0).collect();
    let results = runner.rate_sweep(&fractions);

    println!("Rate sweep from {}:", report::long_date(runner.start_date()));
    println!(
        "{:>10} {:>14} {:>14} {:>14} {:>10}",
        "Rate", "Final", "Interest", "Cash Out", "Profit"
    );
    println!("{}", "-".repeat(68));

    for (rate, result) in cli.rates.iter().zip(results) {
        let result = result.with_context(|| format!("projection at {}% failed", rate))?;
        let summary = &result.summary;
        println!(
            "{:>9}% {:>14} {:>14} {:>14} {:>10}",
            rate,
            report::money(&cli.currency, summary.final_balance),
            report::money(&cli.currency, summary.total_interest),
            report::money(&cli.currency, summary.total_cash_taken_out),
            report::percent(summary.percentage_profit),
        );
    }

    Ok(())
}

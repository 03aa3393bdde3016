//! Daily record and summary output structures for projections

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single row of projection output for one counted day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar date of the day (run start plus day offset)
    pub date: NaiveDate,

    /// Balance after the day's contribution and reinvestment
    pub balance: f64,

    /// Interest accrued on the balance carried into the day
    pub interest: f64,

    /// Portion of the interest added back to the balance
    pub reinvested: f64,

    /// Portion of the interest removed from the system entirely
    pub drawdown: f64,

    /// Interest remaining after reinvestment and drawdown
    pub personal: f64,
}

/// Aggregates for a completed projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub initial_balance: f64,
    pub final_balance: f64,

    /// Cumulative interest accrued over all counted days
    pub total_interest: f64,

    /// Cumulative deposit contributions added to the balance
    pub total_deposits: f64,

    /// Cumulative personal cash taken out: explicit withdrawals plus the
    /// non-reinvested, non-drawdown share of interest
    pub total_cash_taken_out: f64,

    /// Final balance gain relative to the initial balance, in percent
    pub percentage_profit: f64,

    /// Calendar days in the horizon (zero when the horizon is empty)
    pub total_days: i64,

    /// Counted-day estimate per the 5-of-7 approximation
    pub business_days: i64,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// One row per counted day, in ascending day order
    pub records: Vec<DailyRecord>,

    /// Run aggregates
    pub summary: ProjectionSummary,
}

impl ProjectionResult {
    /// Interest split across all records; equals `summary.total_interest`
    /// up to float rounding.
    pub fn distributed_interest(&self) -> f64 {
        self.records
            .iter()
            .map(|r| r.reinvested + r.drawdown + r.personal)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distributed_interest_sums_components() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let result = ProjectionResult {
            records: vec![
                DailyRecord {
                    date,
                    balance: 1005.0,
                    interest: 10.0,
                    reinvested: 5.0,
                    drawdown: 2.0,
                    personal: 3.0,
                },
                DailyRecord {
                    date: date.succ_opt().unwrap(),
                    balance: 1010.0,
                    interest: 10.05,
                    reinvested: 5.0,
                    drawdown: 2.0,
                    personal: 3.05,
                },
            ],
            summary: ProjectionSummary {
                initial_balance: 1000.0,
                final_balance: 1010.0,
                total_interest: 20.05,
                total_deposits: 0.0,
                total_cash_taken_out: 6.05,
                percentage_profit: 1.0,
                total_days: 2,
                business_days: 2,
                start_date: date,
                end_date: date.succ_opt().unwrap(),
            },
        };

        assert_relative_eq!(
            result.distributed_interest(),
            result.summary.total_interest,
            epsilon = 1e-9
        );
    }
}

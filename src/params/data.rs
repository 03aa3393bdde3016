//! Projection parameter structures matching the investment form fields

use serde::{Deserialize, Serialize};

/// Cycle positions treated as the weekend when business days are modeled.
/// Anchored to the run-start offset, not the calendar weekday of the start
/// date: day 0 is always position 0 regardless of what weekday it falls on.
const WEEKEND_POSITIONS: [i64; 2] = [4, 5];

/// How the recurring contribution is applied on counted days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionMode {
    /// No recurring contribution
    None,
    /// Add the contribution amount to the balance each counted day
    Deposits,
    /// Take the contribution amount out of the balance each counted day
    Withdrawals,
}

impl ContributionMode {
    /// Map the form's selection text. Anything unrecognized means no
    /// contribution; the form layer performs type coercion only.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "Deposits" => ContributionMode::Deposits,
            "Withdrawals" => ContributionMode::Withdrawals,
            _ => ContributionMode::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionMode::None => "None",
            ContributionMode::Deposits => "Deposits",
            ContributionMode::Withdrawals => "Withdrawals",
        }
    }
}

/// The full parameter set for one projection run
///
/// All rate fields are decimal fractions (1% = 0.01); the form loader does
/// the percentage scaling at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Starting balance
    pub initial_balance: f64,

    /// Symbol prefixed to displayed amounts
    pub currency_symbol: String,

    /// Interest accrued per counted day, as a fraction of the balance
    pub daily_interest_rate: f64,

    /// Duration components; months count as 30 days, years as 365
    pub days: i64,
    pub months: i64,
    pub years: i64,

    /// When false, two positions per 7-day cycle are skipped entirely
    pub include_all_days: bool,

    /// Fraction of each day's interest added back to the balance
    pub daily_reinvest_rate: f64,

    /// Recurring contribution behavior
    pub contribution_mode: ContributionMode,

    /// Amount applied once per counted day after the skip threshold
    pub contribution_amount: f64,

    /// Day index (0-based) before which contributions do not apply
    pub contribution_skip_days: i64,

    /// Fraction of each day's interest removed from the system entirely
    pub drawdown_rate: f64,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            initial_balance: 0.0,
            currency_symbol: "$".to_string(),
            daily_interest_rate: 0.0,
            days: 0,
            months: 0,
            years: 0,
            include_all_days: true,
            daily_reinvest_rate: 0.0,
            contribution_mode: ContributionMode::None,
            contribution_amount: 0.0,
            contribution_skip_days: 0,
            drawdown_rate: 0.0,
        }
    }
}

impl ProjectionParams {
    /// Total projection horizon in calendar days.
    /// Calendar approximation: months are 30 days, years are 365.
    pub fn total_days(&self) -> i64 {
        self.years * 365 + self.months * 30 + self.days
    }

    /// Estimated counted days over the horizon: all of them, or 5 out of
    /// every 7 with integer truncation.
    pub fn business_days(&self) -> i64 {
        let total = self.total_days();
        if self.include_all_days {
            total
        } else {
            total * 5 / 7
        }
    }

    /// Whether interest, contributions, and reinvestment apply on `day`
    pub fn is_counted_day(&self, day: i64) -> bool {
        self.include_all_days || !WEEKEND_POSITIONS.contains(&(day % 7))
    }

    /// Whether the recurring contribution applies on `day`
    pub fn contribution_due(&self, day: i64) -> bool {
        self.contribution_mode != ContributionMode::None && day >= self.contribution_skip_days
    }
}

//! Core projection engine for day-by-day compound interest runs

use chrono::{Duration, Local, NaiveDate};

use super::records::{DailyRecord, ProjectionResult, ProjectionSummary};
use super::state::ProjectionState;
use crate::error::{ProjectionError, Result, MAX_PROJECTION_DAYS};
use crate::params::{ContributionMode, ProjectionParams};

/// Main projection engine
///
/// Owns one parameter set and has no lifecycle beyond a single run: the
/// output is a pure function of the parameters and the run-start date.
pub struct ProjectionEngine {
    params: ProjectionParams,
}

impl ProjectionEngine {
    /// Create a new engine for the given parameters
    pub fn new(params: ProjectionParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ProjectionParams {
        &self.params
    }

    /// Run the projection starting from today's local date
    pub fn project(&self) -> Result<ProjectionResult> {
        self.project_from(Local::now().date_naive())
    }

    /// Run the projection from an explicit start date
    ///
    /// Day 0 falls on `start_date`; skipped days consume calendar dates
    /// but produce no record and change no state.
    pub fn project_from(&self, start_date: NaiveDate) -> Result<ProjectionResult> {
        if self.params.initial_balance == 0.0 {
            return Err(ProjectionError::ZeroInitialBalance);
        }

        let total_days = self.params.total_days();
        if total_days > MAX_PROJECTION_DAYS {
            return Err(ProjectionError::HorizonTooLong(total_days));
        }

        // A non-positive horizon yields an empty run, not an error
        let horizon = total_days.max(0);
        let business_days = if self.params.include_all_days {
            horizon
        } else {
            horizon * 5 / 7
        };

        log::debug!(
            "projecting {} calendar days ({} counted) from {}",
            horizon,
            business_days,
            start_date
        );

        let mut state = ProjectionState::from_params(&self.params);
        let mut records = Vec::with_capacity(business_days as usize);

        for day in 0..horizon {
            if self.params.is_counted_day(day) {
                records.push(self.accrue_day(&mut state, start_date, day));
            }
        }

        let summary = ProjectionSummary {
            initial_balance: self.params.initial_balance,
            final_balance: state.balance,
            total_interest: state.total_interest,
            total_deposits: state.total_deposits,
            total_cash_taken_out: state.total_cash_taken_out,
            percentage_profit: state.percentage_profit(self.params.initial_balance),
            total_days: horizon,
            business_days,
            start_date,
            end_date: start_date + Duration::days(horizon),
        };

        Ok(ProjectionResult { records, summary })
    }

    /// Apply one counted day to the state and produce its record
    ///
    /// Interest accrues on the balance carried into the day; the day's
    /// contribution lands after that and earns nothing until the next
    /// counted day.
    fn accrue_day(&self, state: &mut ProjectionState, start_date: NaiveDate, day: i64) -> DailyRecord {
        let daily_interest = state.balance * self.params.daily_interest_rate;
        state.total_interest += daily_interest;

        if self.params.contribution_due(day) {
            match self.params.contribution_mode {
                ContributionMode::Deposits => {
                    state.balance += self.params.contribution_amount;
                    state.total_deposits += self.params.contribution_amount;
                }
                ContributionMode::Withdrawals => {
                    state.balance -= self.params.contribution_amount;
                    state.total_cash_taken_out += self.params.contribution_amount;
                }
                ContributionMode::None => {}
            }
        }

        let reinvested = daily_interest * self.params.daily_reinvest_rate;
        let drawdown = daily_interest * self.params.drawdown_rate;
        let personal = daily_interest - reinvested - drawdown;

        state.balance += reinvested;
        state.total_cash_taken_out += personal;

        DailyRecord {
            date: start_date + Duration::days(day),
            balance: state.balance,
            interest: daily_interest,
            reinvested,
            drawdown,
            personal,
        }
    }
}

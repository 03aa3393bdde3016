//! Running state for a projection in progress

use crate::params::ProjectionParams;

/// Balance and cumulative counters carried across counted days
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current balance
    pub balance: f64,

    /// Cumulative interest accrued
    pub total_interest: f64,

    /// Cumulative deposit contributions
    pub total_deposits: f64,

    /// Cumulative personal cash taken out
    pub total_cash_taken_out: f64,
}

impl ProjectionState {
    /// Initialize state at the start of a run
    pub fn from_params(params: &ProjectionParams) -> Self {
        Self {
            balance: params.initial_balance,
            total_interest: 0.0,
            total_deposits: 0.0,
            total_cash_taken_out: 0.0,
        }
    }

    /// Balance gain relative to the initial balance, in percent.
    /// Callers guard against a zero initial balance.
    pub fn percentage_profit(&self, initial_balance: f64) -> f64 {
        (self.balance - initial_balance) / initial_balance * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state_mirrors_params() {
        let params = ProjectionParams {
            initial_balance: 2500.0,
            ..Default::default()
        };
        let state = ProjectionState::from_params(&params);

        assert_relative_eq!(state.balance, 2500.0);
        assert_relative_eq!(state.total_interest, 0.0);
        assert_relative_eq!(state.total_deposits, 0.0);
        assert_relative_eq!(state.total_cash_taken_out, 0.0);
    }

    #[test]
    fn test_percentage_profit() {
        let mut state = ProjectionState::from_params(&ProjectionParams {
            initial_balance: 1000.0,
            ..Default::default()
        });
        state.balance = 1010.0;

        assert_relative_eq!(state.percentage_profit(1000.0), 1.0);
    }
}

//! Scenario runner for batch projections
//!
//! Holds a base parameter set and a fixed run-start date so that parameter
//! variants stay comparable across one batch.

use chrono::{Local, NaiveDate};
use rayon::prelude::*;

use crate::error::Result;
use crate::params::ProjectionParams;
use crate::projection::{ProjectionEngine, ProjectionResult};

/// Batch runner over projection parameter variants
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(base_params);
/// let results = runner.rate_sweep(&[0.0005, 0.001, 0.002]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_params: ProjectionParams,
    start_date: NaiveDate,
}

impl ScenarioRunner {
    /// Create a runner anchored to today's local date
    pub fn new(base_params: ProjectionParams) -> Self {
        Self::with_start_date(base_params, Local::now().date_naive())
    }

    /// Create a runner with an explicit run-start date
    pub fn with_start_date(base_params: ProjectionParams, start_date: NaiveDate) -> Self {
        Self {
            base_params,
            start_date,
        }
    }

    /// Run a single projection with the given parameters
    pub fn run(&self, params: ProjectionParams) -> Result<ProjectionResult> {
        ProjectionEngine::new(params).project_from(self.start_date)
    }

    /// Run many parameter variants in parallel, preserving input order
    pub fn run_scenarios(&self, param_sets: &[ProjectionParams]) -> Vec<Result<ProjectionResult>> {
        param_sets
            .par_iter()
            .map(|params| self.run(params.clone()))
            .collect()
    }

    /// Run the base parameters once per daily interest rate
    pub fn rate_sweep(&self, rates: &[f64]) -> Vec<Result<ProjectionResult>> {
        let variants: Vec<ProjectionParams> = rates
            .iter()
            .map(|&rate| ProjectionParams {
                daily_interest_rate: rate,
                ..self.base_params.clone()
            })
            .collect();
        self.run_scenarios(&variants)
    }

    /// Get reference to the base parameters for inspection/modification
    pub fn base_params(&self) -> &ProjectionParams {
        &self.base_params
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }
}

//! Parse raw form fields into typed projection parameters
//!
//! The web form submits every field as text. This module owns the
//! text-to-type boundary: numeric coercion, percentage scaling, and the
//! checkbox convention where presence means true.

use super::{ContributionMode, ProjectionParams};
use crate::error::{ProjectionError, Result};
use serde::Deserialize;

/// Raw form submission, field names matching the investment form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormParams {
    pub initial_balance: Option<String>,
    pub currency: Option<String>,
    /// Percentage, e.g. "1" for 1% per day
    pub interest_rate: Option<String>,
    pub days: Option<String>,
    pub months: Option<String>,
    pub years: Option<String>,
    /// Checkbox: any submitted value means checked
    pub include_all_days: Option<String>,
    /// Percentage of daily interest reinvested
    pub daily_reinvest_rate: Option<String>,
    /// "Deposits", "Withdrawals", or anything else for none
    pub additional_contributions: Option<String>,
    pub additional_contribution_amount: Option<String>,
    pub additional_contribution_skip_days: Option<String>,
    /// Percentage of daily interest drawn down
    pub drawdown_percentage: Option<String>,
}

fn require<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or(ProjectionError::MissingField(field))
}

fn parse_f64(field: &'static str, value: &Option<String>) -> Result<f64> {
    let raw = require(field, value)?;
    raw.trim()
        .parse()
        .map_err(|_| ProjectionError::InvalidField {
            field,
            value: raw.to_string(),
        })
}

fn parse_i64(field: &'static str, value: &Option<String>) -> Result<i64> {
    let raw = require(field, value)?;
    raw.trim()
        .parse()
        .map_err(|_| ProjectionError::InvalidField {
            field,
            value: raw.to_string(),
        })
}

impl FormParams {
    /// Convert the raw submission into typed parameters.
    ///
    /// Percentage fields are scaled to fractions here; no range validation
    /// beyond type coercion is performed.
    pub fn parse(&self) -> Result<ProjectionParams> {
        Ok(ProjectionParams {
            initial_balance: parse_f64("initial_balance", &self.initial_balance)?,
            currency_symbol: require("currency", &self.currency)?.to_string(),
            daily_interest_rate: parse_f64("interest_rate", &self.interest_rate)? / 100.0,
            days: parse_i64("days", &self.days)?,
            months: parse_i64("months", &self.months)?,
            years: parse_i64("years", &self.years)?,
            include_all_days: self.include_all_days.is_some(),
            daily_reinvest_rate: parse_f64("daily_reinvest_rate", &self.daily_reinvest_rate)?
                / 100.0,
            contribution_mode: ContributionMode::from_form_value(require(
                "additional_contributions",
                &self.additional_contributions,
            )?),
            contribution_amount: parse_f64(
                "additional_contribution_amount",
                &self.additional_contribution_amount,
            )?,
            contribution_skip_days: parse_i64(
                "additional_contribution_skip_days",
                &self.additional_contribution_skip_days,
            )?,
            drawdown_rate: parse_f64("drawdown_percentage", &self.drawdown_percentage)? / 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn full_form() -> FormParams {
        FormParams {
            initial_balance: Some("1000".to_string()),
            currency: Some("$".to_string()),
            interest_rate: Some("1".to_string()),
            days: Some("7".to_string()),
            months: Some("0".to_string()),
            years: Some("0".to_string()),
            include_all_days: Some("on".to_string()),
            daily_reinvest_rate: Some("100".to_string()),
            additional_contributions: Some("None".to_string()),
            additional_contribution_amount: Some("0".to_string()),
            additional_contribution_skip_days: Some("0".to_string()),
            drawdown_percentage: Some("0".to_string()),
        }
    }

    #[test]
    fn test_parse_scales_percentages() {
        let params = full_form().parse().unwrap();
        assert_relative_eq!(params.initial_balance, 1000.0);
        assert_relative_eq!(params.daily_interest_rate, 0.01);
        assert_relative_eq!(params.daily_reinvest_rate, 1.0);
        assert_relative_eq!(params.drawdown_rate, 0.0);
        assert_eq!(params.total_days(), 7);
        assert_eq!(params.contribution_mode, ContributionMode::None);
    }

    #[test]
    fn test_checkbox_presence_means_true() {
        let mut form = full_form();
        assert!(form.parse().unwrap().include_all_days);

        form.include_all_days = None;
        assert!(!form.parse().unwrap().include_all_days);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let mut form = full_form();
        form.initial_balance = None;

        match form.parse() {
            Err(ProjectionError::MissingField("initial_balance")) => {}
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_field_is_an_error() {
        let mut form = full_form();
        form.interest_rate = Some("one percent".to_string());

        match form.parse() {
            Err(ProjectionError::InvalidField { field, value }) => {
                assert_eq!(field, "interest_rate");
                assert_eq!(value, "one percent");
            }
            other => panic!("expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_contribution_text_coerces_to_none() {
        let mut form = full_form();
        form.additional_contributions = Some("Bonuses".to_string());
        assert_eq!(
            form.parse().unwrap().contribution_mode,
            ContributionMode::None
        );
    }

    #[test]
    fn test_form_from_json_body() {
        let body = r#"{
            "initial_balance": "2500.50",
            "currency": "€",
            "interest_rate": "0.5",
            "days": "0",
            "months": "6",
            "years": "1",
            "daily_reinvest_rate": "50",
            "additional_contributions": "Deposits",
            "additional_contribution_amount": "25",
            "additional_contribution_skip_days": "30",
            "drawdown_percentage": "10"
        }"#;

        let form: FormParams = serde_json::from_str(body).unwrap();
        let params = form.parse().unwrap();

        assert_relative_eq!(params.initial_balance, 2500.50);
        assert_eq!(params.currency_symbol, "€");
        assert!(!params.include_all_days);
        assert_eq!(params.total_days(), 365 + 180);
        assert_eq!(params.contribution_mode, ContributionMode::Deposits);
        assert_eq!(params.contribution_skip_days, 30);
        assert_relative_eq!(params.drawdown_rate, 0.10);
    }
}

//! Field-presence validation for user input.
//!
//! Both validators collect every violated rule instead of stopping at the
//! first one, and never mutate their input.

use crate::decision::{DecisionData, EvaluationResult};
use chrono::NaiveDate;

pub const MIN_OPTIONS: usize = 2;

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Validate a decision record. Returns the list of error messages, empty
/// when the record is valid.
pub fn validate_decision(data: &DecisionData) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(data.title.as_deref()) {
        errors.push("Title is required".to_string());
    }

    match data.date.as_deref() {
        None | Some("") => errors.push("Date is required".to_string()),
        Some(date) => {
            if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                errors.push(format!("Date '{}' must be in YYYY-MM-DD format", date));
            }
        }
    }

    if is_blank(data.context.as_deref()) {
        errors.push("Context is required".to_string());
    }

    let options = data.options.as_deref();
    if options.map_or(true, |o| o.len() < MIN_OPTIONS) {
        errors.push(format!(
            "At least {} options are required to compare",
            MIN_OPTIONS
        ));
    }

    if let Some(options) = options {
        for (index, option) in options.iter().enumerate() {
            if option.name.trim().is_empty() {
                errors.push(format!("Option {} must have a name", index + 1));
            }
        }
    }

    if is_blank(data.chosen.as_deref()) {
        errors.push("The chosen option is required".to_string());
    }

    if let (Some(chosen), Some(options)) = (data.chosen.as_deref(), options) {
        if !chosen.is_empty() && !options.iter().any(|o| o.name == chosen) {
            errors.push("The chosen option must be one of the listed options".to_string());
        }
    }

    errors
}

/// Validate an evaluation before it is applied.
pub fn validate_evaluation(result: &str, learnings: &str) -> Vec<String> {
    let mut errors = Vec::new();

    // Exact wire values only; callers normalize user input first.
    if !EvaluationResult::ALL.iter().any(|r| r.as_str() == result) {
        errors.push("A valid result (POSITIVE, NEGATIVE or NEUTRAL) is required".to_string());
    }

    if learnings.trim().is_empty() {
        errors.push("Learnings are required".to_string());
    }

    errors
}

//! Declarative field validation for forecast creation requests.

use crate::models::{CreateForecastRequest, FieldError};
use chrono::NaiveDate;

/// One validation rule: a named field, a failure message, and a predicate
/// that returns `true` when the request passes.
struct FieldRule {
    field: &'static str,
    message: &'static str,
    passes: fn(&CreateForecastRequest, NaiveDate) -> bool,
}

/// Rules are evaluated independently and every failure is reported. Rules
/// that refine an optional field pass vacuously when the value is absent, so
/// a missing value only reports its presence rule.
const RULES: &[FieldRule] = &[
    FieldRule {
        field: "date",
        message: "Date is required",
        passes: |request, _| request.date.is_some(),
    },
    FieldRule {
        field: "date",
        message: "Date must be today or in the future",
        passes: |request, today| request.date.is_none_or(|date| date >= today),
    },
    FieldRule {
        field: "temperatureC",
        message: "Temperature must be between -50 and 60 degrees Celsius",
        passes: |request, _| (-50..=60).contains(&request.temperature_c),
    },
    FieldRule {
        field: "summary",
        message: "Summary is required",
        passes: |request, _| request.summary.as_deref().is_some_and(|s| !s.is_empty()),
    },
    FieldRule {
        field: "summary",
        message: "Summary cannot exceed 100 characters",
        passes: |request, _| {
            request
                .summary
                .as_deref()
                .is_none_or(|s| s.chars().count() <= 100)
        },
    },
];

/// Validate a creation request against the rule list.
///
/// `today` is passed explicitly so the date rule stays deterministic under
/// test. An empty result means the request is valid.
pub fn validate(request: &CreateForecastRequest, today: NaiveDate) -> Vec<FieldError> {
    RULES
        .iter()
        .filter(|rule| !(rule.passes)(request, today))
        .map(|rule| FieldError::new(rule.field, rule.message))
        .collect()
}

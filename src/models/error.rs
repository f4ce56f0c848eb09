//! Error taxonomy and wire formats for failed requests.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validation failure tied to one named input field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Apiv2Schema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Single-message error body, e.g. `{"Error": "Days must be between 1 and 14"}`
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}

/// Aggregated body for requests that failed field validation
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Errors surfaced by the forecast endpoints.
///
/// Every variant is translated to a structured JSON response at the handler
/// boundary; none are fatal to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller-supplied parameter outside the accepted domain
    #[error("{0}")]
    InvalidArgument(String),
    /// Logically absent result
    #[error("{0}")]
    NotFound(String),
    /// One or more field-level rule violations
    #[error("request validation failed")]
    Validation(Vec<FieldError>),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InvalidArgument(message) => {
                HttpResponse::BadRequest().json(ErrorResponse {
                    error: message.clone(),
                })
            }
            ApiError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
                error: message.clone(),
            }),
            ApiError::Validation(errors) => {
                HttpResponse::BadRequest().json(ValidationErrorResponse {
                    errors: errors.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_maps_to_bad_request() {
        let error = ApiError::InvalidArgument("Days must be between 1 and 14".to_string());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let error = ApiError::NotFound("Cannot retrieve forecast for past dates".to_string());
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let error = ApiError::Validation(vec![FieldError::new("summary", "Summary is required")]);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_response_uses_capitalized_key() {
        let body = ErrorResponse {
            error: "Days must be between 1 and 14".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["Error"], "Days must be between 1 and 14");
    }

    #[test]
    fn validation_response_lists_every_error() {
        let body = ValidationErrorResponse {
            errors: vec![
                FieldError::new("date", "Date is required"),
                FieldError::new("summary", "Summary is required"),
            ],
        };
        let json = serde_json::to_value(&body).unwrap();
        let errors = json["errors"].as_array().unwrap();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0]["field"], "date");
        assert_eq!(errors[1]["message"], "Summary is required");
    }
}

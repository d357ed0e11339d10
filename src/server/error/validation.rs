use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationErrorDto};

/// A single failed validation rule, keyed by the request property it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub property: String,
    pub message: String,
}

impl FieldError {
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
        }
    }
}

/// Request failed one or more field validation rules.
#[derive(Error, Debug)]
#[error("Validation failed: {errors:?}")]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Validation error consisting of a single field failure.
    pub fn single(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(property, message)],
        }
    }
}

impl From<FieldError> for ValidationError {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(errors = ?self.errors, "Request failed validation");

        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                message: "Validation failed".to_string(),
                errors: self
                    .errors
                    .into_iter()
                    .map(|e| FieldErrorDto {
                        property: e.property,
                        message: e.message,
                    })
                    .collect(),
            }),
        )
            .into_response()
    }
}

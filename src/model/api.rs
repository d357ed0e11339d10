use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
    /// Identifier logged alongside the error, present for domain errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

/// A single rejected request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    /// Name of the offending request field
    pub property: String,
    /// Why the value was rejected
    pub message: String,
}

/// The response when request validation fails
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub message: String,
    pub errors: Vec<FieldErrorDto>,
}

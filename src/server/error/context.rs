use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::api::ErrorDto;

/// Structured context attached to a domain error when it is turned into a response.
///
/// The correlation ID is logged with the error and returned to the client so a failed
/// request can be matched with its log entry.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub domain: &'static str,
    pub occurred_at: DateTime<Utc>,
    pub correlation_id: Uuid,
}

impl ErrorContext {
    pub fn new(domain: &'static str) -> Self {
        Self {
            domain,
            occurred_at: Utc::now(),
            correlation_id: Uuid::new_v4(),
        }
    }

    /// Logs `error` with this context at debug level and builds a JSON error response
    /// carrying the error's message and the correlation ID.
    pub fn respond<E: std::fmt::Display>(self, status: StatusCode, error: &E) -> Response {
        tracing::debug!(
            domain = self.domain,
            occurred_at = %self.occurred_at,
            correlation_id = %self.correlation_id,
            status = status.as_u16(),
            "{}",
            error
        );

        (
            status,
            Json(ErrorDto {
                error: error.to_string(),
                correlation_id: Some(self.correlation_id.to_string()),
            }),
        )
            .into_response()
    }
}

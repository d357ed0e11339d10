use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::context::ErrorContext;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User with ID {0} could not be found")]
    NotFound(i32),
    #[error("User with ID {requester_id} does not have permission to access user with ID {user_id}")]
    NotSelf { user_id: i32, requester_id: i32 },
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotSelf { .. } => StatusCode::FORBIDDEN,
        };

        ErrorContext::new("User").respond(status, &self)
    }
}

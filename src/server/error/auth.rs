use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::context::ErrorContext;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("User with ID {user_id} is missing the required role {role}")]
    MissingRole { user_id: i32, role: &'static str },
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::MissingRole { .. } => StatusCode::FORBIDDEN,
        };

        ErrorContext::new("Auth").respond(status, &self)
    }
}

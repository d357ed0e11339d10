use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::{
    validation::{FieldError, ValidationError},
    InternalServerError,
};

#[derive(Error, Debug)]
pub enum IdentityError {
    /// The identity store could not be reached or failed mid-operation.
    #[error("Identity provider is unavailable: {0}")]
    Unavailable(String),
    /// The identity store refused the account, e.g. duplicate email or weak password.
    #[error("Identity provider rejected the request: {0:?}")]
    Rejected(Vec<FieldError>),
    #[error("Failed to hash or verify password: {0}")]
    PasswordHash(String),
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        match self {
            Self::Rejected(errors) => ValidationError { errors }.into_response(),
            err @ (Self::Unavailable(_) | Self::PasswordHash(_)) => {
                InternalServerError(err).into_response()
            }
        }
    }
}

impl From<argon2::password_hash::Error> for IdentityError {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(err.to_string())
    }
}

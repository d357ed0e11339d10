use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::context::ErrorContext;

#[derive(Error, Debug)]
pub enum AdoptionError {
    #[error("Adoption application with ID {0} could not be found")]
    NotFound(i32),
    #[error(
        "User with ID {user_id} does not have permission to access adoption application with ID {application_id}"
    )]
    NotOwner { application_id: i32, user_id: i32 },
}

impl IntoResponse for AdoptionError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotOwner { .. } => StatusCode::FORBIDDEN,
        };

        ErrorContext::new("Adoption").respond(status, &self)
    }
}

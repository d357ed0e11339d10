use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::context::ErrorContext;

#[derive(Error, Debug)]
pub enum ShelterError {
    #[error("Shelter with ID {0} could not be found")]
    NotFound(i32),
    #[error("User with ID {0} does not have a shelter")]
    NotFoundForUser(i32),
    #[error("User with ID {user_id} does not have permission to access shelter with ID {shelter_id}")]
    NotOwner { shelter_id: i32, user_id: i32 },
    #[error(
        "User with ID {0} already has a shelter, each user can only have one shelter registered at a time"
    )]
    AlreadyRegistered(i32),
}

impl IntoResponse for ShelterError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) | Self::NotFoundForUser(_) => StatusCode::NOT_FOUND,
            Self::NotOwner { .. } => StatusCode::FORBIDDEN,
            Self::AlreadyRegistered(_) => StatusCode::CONFLICT,
        };

        ErrorContext::new("Shelter").respond(status, &self)
    }
}

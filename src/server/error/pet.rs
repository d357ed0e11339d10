use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::context::ErrorContext;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("Pet with ID {0} could not be found")]
    NotFound(i32),
}

impl IntoResponse for PetError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        ErrorContext::new("Pet").respond(status, &self)
    }
}

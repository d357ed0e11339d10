//! Error types for the Pawfect Home server.
//!
//! Each domain (shelters, pets, adoptions, users, authentication, identity, validation,
//! configuration) has its own `thiserror` enum with an `IntoResponse` implementation mapping
//! it to an HTTP status. The aggregate [`Error`] converts from each of them via `?` and
//! dispatches to the domain mapping at the HTTP boundary, falling back to a logged 500 with a
//! generic message for infrastructure failures so internal details never reach clients.

pub mod adoption;
pub mod auth;
pub mod config;
pub mod context;
pub mod identity;
pub mod pet;
pub mod retry;
pub mod shelter;
pub mod user;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        adoption::AdoptionError, auth::AuthError, config::ConfigError, identity::IdentityError,
        pet::PetError, shelter::ShelterError, user::UserError, validation::ValidationError,
    },
};

/// Main error type for the Pawfect Home server.
///
/// Aggregates the domain error enums and the external library errors into a single type so
/// services and controllers can propagate everything with `?`.
///
/// # Error Categories
/// - Domain errors (shelter, pet, adoption, user): not found, ownership, conflicts
/// - Request errors (validation, authentication, identity provider rejections)
/// - Configuration errors (missing/invalid environment variables)
/// - External library errors (database, sessions, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error (no session, missing role, bad credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Identity provider error (account rejected, provider unavailable).
    #[error(transparent)]
    IdentityError(#[from] IdentityError),
    /// Request failed field validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Shelter domain error.
    #[error(transparent)]
    ShelterError(#[from] ShelterError),
    /// Pet domain error.
    #[error(transparent)]
    PetError(#[from] PetError),
    /// Adoption application domain error.
    #[error(transparent)]
    AdoptionError(#[from] AdoptionError),
    /// User domain error.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain and request errors delegate to their own `IntoResponse` implementations; all
/// remaining variants are internal server errors.
///
/// # Returns
/// - 400 Bad Request - Validation failures and rejected accounts
/// - 401 Unauthorized - No authenticated user in session
/// - 403 Forbidden - Ownership violations and missing roles
/// - 404 Not Found - Missing shelters, pets, applications, or users
/// - 409 Conflict - A second shelter for the same user
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::IdentityError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ShelterError(err) => err.into_response(),
            Self::PetError(err) => err.into_response(),
            Self::AdoptionError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            err @ (Self::ParseError(_)
            | Self::InternalError(_)
            | Self::DbErr(_)
            | Self::SessionError(_)
            | Self::SessionRedisError(_)
            | Self::IoError(_)) => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
                correlation_id: None,
            }),
        )
            .into_response()
    }
}

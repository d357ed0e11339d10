//! HTTP controller endpoints for the Pawfect Home web API.
//!
//! Axum handlers for authentication, shelters, pets, adoption applications, and users.
//! Controllers resolve the session identity, enforce role requirements, call into the
//! services, and pick the response status. Errors are turned into responses by
//! [`crate::server::error::Error`]'s `IntoResponse` implementation. Every handler is
//! documented for the OpenAPI document with utoipa.

pub mod adoption;
pub mod auth;
pub mod pet;
pub mod shelter;
pub mod user;
pub mod util;

//! Request and response types exchanged over the HTTP API.
//!
//! Every type here is serialized as JSON and registered with the OpenAPI document. Request
//! types derive `validator::Validate`; the service layer normalizes them before validating.

pub mod adoption;
pub mod api;
pub mod auth;
pub mod pet;
pub mod shelter;
pub mod user;

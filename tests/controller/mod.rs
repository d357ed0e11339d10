//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with the test database state and a memory-backed session,
//! asserting on the status codes they respond with.

mod adoption;
mod auth;
mod pet;
mod shelter;
mod user;

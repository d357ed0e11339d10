//! Server application models.
//!
//! Application state shared by the HTTP handlers and type-safe session data.

pub mod app;
pub mod session;

//! Session data models.
//!
//! Type-safe wrappers for values stored in the tower-sessions session (Valkey/Redis backed
//! in production).

pub mod user;

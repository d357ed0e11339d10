//! Utility functions and helpers for server operations.
//!
//! Request normalization and validation, and date parsing shared by the services.

pub mod date;
pub mod validation;

//! Utility functions for controller request handling.

pub mod identity;
pub mod json;

//! Data access layer repositories.
//!
//! Repositories are thin wrappers over sea-orm queries, one per aggregate. They are generic
//! over [`sea_orm::ConnectionTrait`] so they work with both a pooled connection and a
//! transaction, and they never apply business rules: existence and ownership checks live in
//! the service layer.

pub mod adoption;
pub mod pet;
pub mod shelter;
pub mod user;

//! Service layer for business logic and orchestration.
//!
//! Services validate requests, check ownership and roles, and coordinate repository calls.
//! They return DTOs, never entities. Each operation commits independently; the only retried
//! operation is the role revocation that follows a shelter removal.

pub mod adoption;
pub mod auth;
pub mod pet;
pub mod retry;
pub mod shelter;
pub mod user;

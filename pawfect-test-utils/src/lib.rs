//! Test utilities for the Pawfect Home server.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares which tables to create, and
//! the resulting [`TestContext`] exposes the database, a session, and fixture helpers for
//! inserting users, shelters, pets, and adoption applications.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_PASSWORD, TEST_SHELTER_OWNER_ROLE},
        TestBuilder, TestContext, TestError,
    };
}

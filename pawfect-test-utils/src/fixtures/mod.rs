//! Database fixtures for test execution.
//!
//! - `user` - user accounts and roles
//! - `shelter` - shelters and shelter owners
//! - `pet` - pets belonging to a shelter
//! - `adoption` - adoption applications

pub mod adoption;
pub mod pet;
pub mod shelter;
pub mod user;

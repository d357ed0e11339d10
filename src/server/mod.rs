//! Server application core modules.
//!
//! This module contains the backend of the Pawfect pet adoption system: HTTP routing,
//! session based authentication, the identity provider, database repositories, and the
//! services enforcing shelter, pet and adoption ownership rules.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod identity;
pub mod mapper;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;

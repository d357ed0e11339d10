//! Conversions between persistence entities and wire DTOs.
//!
//! Entities never leave the service layer: services convert them into DTOs through the
//! `From` implementations in this module before returning.

pub mod adoption;
pub mod pet;
pub mod shelter;
pub mod user;

//! SeaORM entities for the Pawfect Home database schema.

pub mod prelude;

pub mod adoption_application;
pub mod pet;
pub mod sea_orm_active_enums;
pub mod shelter;
pub mod user;
pub mod user_role;

//! Request normalization and validation.
//!
//! Requests are validated with `validator` derives on the DTOs. Before validating, string
//! fields are trimmed through the [`Normalize`] trait so that surrounding whitespace neither
//! counts toward length limits nor ends up persisted.

use crate::{
    model::{
        auth::LoginRequest,
        pet::{RegisterPetRequest, UpdatePetRequest},
        shelter::{RegisterShelterRequest, UpdateShelterRequest},
        user::RegisterUserRequest,
    },
    server::error::validation::{FieldError, ValidationError},
};

/// Trims string fields of a request in place.
pub trait Normalize {
    fn normalize(&mut self);
}

fn trim(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn trim_opt(value: &mut Option<String>) {
    if let Some(value) = value {
        trim(value);
    }
}

/// Normalizes the request, then runs its validation rules.
///
/// # Returns
/// - `Ok(())` - Request passed every rule
/// - `Err(ValidationError)` - Every failed rule as a property/message pair, sorted by property
pub fn normalize_and_validate<T>(request: &mut T) -> Result<(), ValidationError>
where
    T: Normalize + validator::Validate,
{
    request.normalize();

    let Err(errors) = request.validate() else {
        return Ok(());
    };

    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(property, errors)| {
            errors.iter().map(move |error| {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("The {} field is invalid", property),
                };
                FieldError::new(property.to_string(), message)
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.property.cmp(&b.property));

    Err(ValidationError {
        errors: field_errors,
    })
}

impl Normalize for RegisterShelterRequest {
    fn normalize(&mut self) {
        trim(&mut self.name);
        trim_opt(&mut self.description);
        trim(&mut self.email);
    }
}

impl Normalize for UpdateShelterRequest {
    fn normalize(&mut self) {
        trim_opt(&mut self.name);
        trim_opt(&mut self.description);
        trim_opt(&mut self.email);
    }
}

impl Normalize for RegisterPetRequest {
    fn normalize(&mut self) {
        trim(&mut self.name);
        trim(&mut self.birthdate);
        trim_opt(&mut self.breed);
        trim_opt(&mut self.description);
        trim_opt(&mut self.image_url);
    }
}

impl Normalize for UpdatePetRequest {
    fn normalize(&mut self) {
        trim_opt(&mut self.name);
        trim_opt(&mut self.birthdate);
        trim_opt(&mut self.breed);
        trim_opt(&mut self.description);
        trim_opt(&mut self.image_url);
    }
}

// Passwords are taken verbatim
impl Normalize for RegisterUserRequest {
    fn normalize(&mut self) {
        trim(&mut self.first_name);
        trim(&mut self.last_name);
        trim(&mut self.email);
    }
}

impl Normalize for LoginRequest {
    fn normalize(&mut self) {
        trim(&mut self.email);
    }
}

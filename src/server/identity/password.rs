//! Argon2id password hashing, verification, and password policy.
//!
//! Hashes are stored in PHC string format so the algorithm parameters and salt travel with
//! the hash. Hashing is CPU bound, so callers in async code run these functions under
//! `tokio::task::spawn_blocking`.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::validation::FieldError;

const MIN_PASSWORD_LENGTH: usize = 6;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(false)` on mismatch, and also when the stored hash cannot be parsed, since
/// such an account can never be logged into.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(parsed_hash) => parsed_hash,
        Err(_) => return Ok(false),
    };

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Check a password against the account password policy.
///
/// A password needs at least 6 characters, a digit, a lowercase letter, an uppercase letter,
/// and a character that is not alphanumeric. Every failed rule is reported.
pub fn check_password_policy(password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "password",
            format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            ),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new(
            "password",
            "Password must contain at least one digit",
        ));
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        errors.push(FieldError::new(
            "password",
            "Password must contain at least one lowercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        errors.push(FieldError::new(
            "password",
            "Password must contain at least one uppercase letter",
        ));
    }
    if password.chars().all(|c| c.is_alphanumeric()) {
        errors.push(FieldError::new(
            "password",
            "Password must contain at least one non-alphanumeric character",
        ));
    }

    errors
}

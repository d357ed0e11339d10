//! Authentication service layer.
//!
//! Checks login credentials and resolves session user IDs to identities through the
//! identity provider.

#[cfg(test)]
mod tests;

use crate::{
    model::{
        auth::{IdentityDto, LoginRequest},
        user::UserDto,
    },
    server::{
        error::{auth::AuthError, Error},
        identity::{Identity, IdentityProvider},
        util::validation::normalize_and_validate,
    },
};

pub struct AuthService<'a> {
    identity: &'a dyn IdentityProvider,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(identity: &'a dyn IdentityProvider) -> Self {
        Self { identity }
    }

    /// Checks the login credentials.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Credentials are valid
    /// - `Err(Error::ValidationError)` - Email or password missing or malformed
    /// - `Err(Error::AuthError(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, mut request: LoginRequest) -> Result<UserDto, Error> {
        normalize_and_validate(&mut request)?;

        let user = self
            .identity
            .verify_credentials(&request.email, &request.password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::debug!(user_id = %user.id, "User logged in");

        Ok(user.into())
    }

    /// Resolves a session user ID to an identity.
    ///
    /// # Returns
    /// - `Ok(Identity)` - User exists, with the roles they hold
    /// - `Err(Error::AuthError(UserNotInDatabase))` - Session refers to a deleted user
    pub async fn resolve_identity(&self, user_id: i32) -> Result<Identity, Error> {
        self.identity
            .resolve(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        Self {
            user_id: identity.user_id,
            roles: identity
                .roles
                .iter()
                .map(|role| role.as_str().to_string())
                .collect(),
        }
    }
}

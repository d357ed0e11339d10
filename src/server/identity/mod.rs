//! Identity and role management.
//!
//! Services and controllers never talk to account storage directly. They go through the
//! [`IdentityProvider`] trait, which resolves a session user ID to an [`Identity`], creates
//! accounts, checks credentials, and grants or revokes roles. [`DatabaseIdentityProvider`]
//! is the production implementation, storing argon2 password hashes and role rows in the
//! application database.

pub mod database;
pub mod password;

use std::{fmt, str::FromStr};

use async_trait::async_trait;

use crate::server::error::{auth::AuthError, Error};

pub use database::DatabaseIdentityProvider;

/// Authorization roles a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Granted when a user registers a shelter, gates shelter and pet management
    ShelterOwner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShelterOwner => "ShelterOwner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ShelterOwner" => Ok(Self::ShelterOwner),
            other => Err(Error::ParseError(format!("Unknown role: {}", other))),
        }
    }
}

/// An authenticated user and the roles they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i32,
    pub roles: Vec<Role>,
}

impl Identity {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns [`AuthError::MissingRole`] unless the identity holds `role`.
    pub fn require_role(&self, role: Role) -> Result<(), Error> {
        if self.has_role(role) {
            return Ok(());
        }

        Err(AuthError::MissingRole {
            user_id: self.user_id,
            role: role.as_str(),
        }
        .into())
    }
}

/// Account details for creating a new identity.
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Account storage and role management used by services and controllers.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Creates a new account.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(Error::IdentityError(Rejected))` - Email already registered or password refused
    async fn create_account(&self, account: NewAccount) -> Result<entity::user::Model, Error>;

    /// Checks an email and password pair.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Credentials are valid
    /// - `Ok(None)` - Unknown email or wrong password
    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<entity::user::Model>, Error>;

    /// Resolves a user ID to an identity with its roles, `None` if the user does not exist.
    async fn resolve(&self, user_id: i32) -> Result<Option<Identity>, Error>;

    /// Grants a role to a user. Granting a role the user already holds is a no-op.
    async fn grant_role(&self, user_id: i32, role: Role) -> Result<(), Error>;

    /// Revokes a role from a user. Revoking a role the user does not hold is a no-op.
    async fn revoke_role(&self, user_id: i32, role: Role) -> Result<(), Error>;
}

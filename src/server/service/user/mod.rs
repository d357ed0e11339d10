//! User service layer.
//!
//! Account creation goes through the identity provider. Lookup and removal are
//! self-service: a user can only read or delete their own account.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{RegisterUserRequest, UserDto},
    server::{
        data::user::UserRepository,
        error::{identity::IdentityError, user::UserError, validation::ValidationError, Error},
        identity::{IdentityProvider, NewAccount},
        util::validation::normalize_and_validate,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    identity: &'a dyn IdentityProvider,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection, identity: &'a dyn IdentityProvider) -> Self {
        Self { db, identity }
    }

    /// Creates a new user account.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ValidationError)` - Request failed validation, the email is taken, or the
    ///   password does not meet the password policy
    pub async fn register_user(&self, mut request: RegisterUserRequest) -> Result<UserDto, Error> {
        normalize_and_validate(&mut request)?;

        let account = NewAccount {
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
        };

        let user = match self.identity.create_account(account).await {
            Ok(user) => user,
            Err(Error::IdentityError(IdentityError::Rejected(errors))) => {
                return Err(ValidationError { errors }.into());
            }
            Err(e) => return Err(e),
        };

        tracing::info!(user_id = %user.id, "Registered user");

        Ok(user.into())
    }

    /// Gets the requester's own account.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The user
    /// - `Err(Error::UserError(NotSelf))` - Requester asked for another user's account
    /// - `Err(Error::UserError(NotFound))` - User does not exist
    pub async fn get_user(&self, requester_id: i32, user_id: i32) -> Result<UserDto, Error> {
        ensure_self(requester_id, user_id)?;

        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(user.into())
    }

    /// Deletes the requester's own account along with their shelter, pets, roles, and
    /// adoption applications.
    pub async fn remove_user(&self, requester_id: i32, user_id: i32) -> Result<(), Error> {
        ensure_self(requester_id, user_id)?;

        let result = UserRepository::new(self.db).delete(user_id).await?;
        if result.rows_affected == 0 {
            return Err(UserError::NotFound(user_id).into());
        }

        tracing::info!(user_id = %user_id, "Removed user");

        Ok(())
    }
}

fn ensure_self(requester_id: i32, user_id: i32) -> Result<(), UserError> {
    if requester_id != user_id {
        return Err(UserError::NotSelf {
            user_id,
            requester_id,
        });
    }

    Ok(())
}

//! Shelter service layer.
//!
//! Enforces the one-shelter-per-user rule and shelter ownership, and keeps the ShelterOwner
//! role in step with shelter registration and removal.

#[cfg(test)]
mod tests;

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, IntoActiveModel, SqlErr};

use crate::{
    model::shelter::{
        RegisterShelterRequest, ShelterDetailDto, ShelterDto, ShelterSummaryDto,
        UpdateShelterRequest,
    },
    server::{
        data::shelter::ShelterRepository,
        error::{shelter::ShelterError, Error},
        identity::{IdentityProvider, Role},
        service::retry::RetryContext,
        util::validation::normalize_and_validate,
    },
};

/// Description stored for shelters registered without one
pub const DEFAULT_SHELTER_DESCRIPTION: &str = "No description";

/// Outcome of revoking the ShelterOwner role after a shelter was removed.
///
/// The shelter is already gone when revocation runs, so a failed revocation is reported
/// alongside the successful removal rather than as an error.
#[derive(Debug)]
pub enum RoleRevocation {
    Revoked,
    /// All attempts failed, holds the last error
    Failed(Error),
}

/// Fetches a shelter and checks that it is owned by `user_id`.
///
/// # Returns
/// - `Ok(Model)` - Shelter exists and is owned by the user
/// - `Err(Error::ShelterError(NotFound))` - No shelter with that ID
/// - `Err(Error::ShelterError(NotOwner))` - Shelter is owned by another user
pub async fn find_owned_shelter<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    shelter_id: i32,
) -> Result<entity::shelter::Model, Error> {
    let shelter = ShelterRepository::new(db)
        .get(shelter_id)
        .await?
        .ok_or(ShelterError::NotFound(shelter_id))?;

    if shelter.user_id != user_id {
        return Err(ShelterError::NotOwner {
            shelter_id,
            user_id,
        }
        .into());
    }

    Ok(shelter)
}

pub struct ShelterService<'a> {
    db: &'a DatabaseConnection,
    identity: &'a dyn IdentityProvider,
    retry: RetryContext,
}

impl<'a> ShelterService<'a> {
    /// Creates a new instance of [`ShelterService`]
    pub fn new(db: &'a DatabaseConnection, identity: &'a dyn IdentityProvider) -> Self {
        Self {
            db,
            identity,
            retry: RetryContext::new(),
        }
    }

    /// Replaces the retry policy used for role revocation
    pub fn with_retry_context(mut self, retry: RetryContext) -> Self {
        self.retry = retry;
        self
    }

    /// Registers a shelter for the user and grants them the ShelterOwner role.
    ///
    /// The role grant is best effort: a failure is logged and the shelter is still returned.
    ///
    /// # Returns
    /// - `Ok(ShelterDto)` - The registered shelter
    /// - `Err(Error::ValidationError)` - Request failed validation
    /// - `Err(Error::ShelterError(AlreadyRegistered))` - User already has a shelter
    pub async fn register_shelter(
        &self,
        user_id: i32,
        mut request: RegisterShelterRequest,
    ) -> Result<ShelterDto, Error> {
        normalize_and_validate(&mut request)?;

        let shelter_repo = ShelterRepository::new(self.db);

        if shelter_repo.get_by_user_id(user_id).await?.is_some() {
            return Err(ShelterError::AlreadyRegistered(user_id).into());
        }

        let description = request
            .description
            .unwrap_or_else(|| DEFAULT_SHELTER_DESCRIPTION.to_string());

        let shelter = match shelter_repo
            .create(user_id, request.name, description, request.email)
            .await
        {
            Ok(shelter) => shelter,
            // A concurrent registration won the race past the existence check
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(ShelterError::AlreadyRegistered(user_id).into());
            }
            Err(err) => return Err(err.into()),
        };

        if let Err(e) = self.identity.grant_role(user_id, Role::ShelterOwner).await {
            tracing::warn!(
                user_id = %user_id,
                shelter_id = %shelter.id,
                "Failed to grant {} role after shelter registration: {}",
                Role::ShelterOwner,
                e
            );
        }

        tracing::info!(user_id = %user_id, shelter_id = %shelter.id, "Registered shelter");

        Ok(shelter.into())
    }

    /// Applies the present fields of `request` to a shelter owned by the user.
    pub async fn update_shelter(
        &self,
        user_id: i32,
        shelter_id: i32,
        mut request: UpdateShelterRequest,
    ) -> Result<ShelterDto, Error> {
        normalize_and_validate(&mut request)?;

        let shelter = find_owned_shelter(self.db, user_id, shelter_id).await?;

        let mut shelter_am = shelter.clone().into_active_model();
        if let Some(name) = request.name {
            shelter_am.name = ActiveValue::Set(name);
        }
        if let Some(description) = request.description {
            shelter_am.description = ActiveValue::Set(description);
        }
        if let Some(email) = request.email {
            shelter_am.email = ActiveValue::Set(email);
        }

        if !shelter_am.is_changed() {
            return Ok(shelter.into());
        }

        let shelter = ShelterRepository::new(self.db).update(shelter_am).await?;

        Ok(shelter.into())
    }

    /// Removes a shelter owned by the user, then revokes their ShelterOwner role.
    ///
    /// Deleting the shelter cascades to its pets and their adoption applications. Role
    /// revocation is retried with exponential backoff; its outcome is returned so callers
    /// can observe a failure even though the removal itself succeeded.
    ///
    /// # Returns
    /// - `Ok(RoleRevocation)` - Shelter removed, with the outcome of the role revocation
    /// - `Err(Error::ShelterError(NotFound))` - No shelter with that ID
    /// - `Err(Error::ShelterError(NotOwner))` - Shelter is owned by another user
    pub async fn remove_shelter(
        &self,
        user_id: i32,
        shelter_id: i32,
    ) -> Result<RoleRevocation, Error> {
        let shelter = find_owned_shelter(self.db, user_id, shelter_id).await?;

        ShelterRepository::new(self.db).delete(shelter.id).await?;

        tracing::info!(user_id = %user_id, shelter_id = %shelter.id, "Removed shelter");

        Ok(self.revoke_shelter_owner_role(user_id).await)
    }

    async fn revoke_shelter_owner_role(&self, user_id: i32) -> RoleRevocation {
        let identity = self.identity;

        let result = self
            .retry
            .execute_with_retry(
                &format!("revoke {} role for user ID {}", Role::ShelterOwner, user_id),
                || identity.revoke_role(user_id, Role::ShelterOwner),
            )
            .await;

        match result {
            Ok(()) => RoleRevocation::Revoked,
            Err(e) => {
                tracing::error!(
                    user_id = %user_id,
                    "Shelter removed but {} role could not be revoked: {}",
                    Role::ShelterOwner,
                    e
                );

                RoleRevocation::Failed(e)
            }
        }
    }

    /// Gets a shelter with summaries of all its pets.
    pub async fn get_shelter(&self, shelter_id: i32) -> Result<ShelterDetailDto, Error> {
        let shelter = ShelterRepository::new(self.db)
            .get_with_pets(shelter_id)
            .await?
            .ok_or(ShelterError::NotFound(shelter_id))?;

        Ok(shelter.into())
    }

    /// Gets all shelters with the number of pets each lists.
    pub async fn get_all_shelters(&self) -> Result<Vec<ShelterSummaryDto>, Error> {
        let shelters = ShelterRepository::new(self.db)
            .get_all_with_pet_counts()
            .await?;

        Ok(shelters.into_iter().map(ShelterSummaryDto::from).collect())
    }
}

//! Adoption application service layer.
//!
//! Applications move from Pending to Approved or Declined. The applicant can read and
//! withdraw their own applications; the owner of the pet's shelter can read them and set
//! their status.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::adoption::{AdoptionDto, RegisterAdoptionRequest, UpdateAdoptionStatusRequest},
    server::{
        data::{
            adoption::{AdoptionRepository, ApplicationWithPet},
            pet::PetRepository,
            shelter::ShelterRepository,
            user::UserRepository,
        },
        error::{
            adoption::AdoptionError, pet::PetError, shelter::ShelterError, user::UserError, Error,
        },
    },
};

pub struct AdoptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdoptionService<'a> {
    /// Creates a new instance of [`AdoptionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a pending adoption application by the user for a pet.
    ///
    /// # Returns
    /// - `Ok(AdoptionDto)` - The created application
    /// - `Err(Error::UserError(NotFound))` - User does not exist
    /// - `Err(Error::PetError(NotFound))` - Pet does not exist
    pub async fn register_adoption(
        &self,
        user_id: i32,
        request: RegisterAdoptionRequest,
    ) -> Result<AdoptionDto, Error> {
        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(UserError::NotFound(user_id).into());
        }

        let pet = PetRepository::new(self.db)
            .get(request.pet_id)
            .await?
            .ok_or(PetError::NotFound(request.pet_id))?;

        let application = AdoptionRepository::new(self.db)
            .create(user_id, pet.id)
            .await?;

        tracing::info!(
            user_id = %user_id,
            pet_id = %pet.id,
            application_id = %application.id,
            "Submitted adoption application"
        );

        Ok(AdoptionDto::from((application, Some(pet))))
    }

    /// Gets an application visible to the user as its applicant or as the pet's shelter owner.
    pub async fn get_adoption(
        &self,
        user_id: i32,
        application_id: i32,
    ) -> Result<AdoptionDto, Error> {
        let (application, pet) = self.find_application(application_id).await?;

        if application.user_id != user_id && !self.owns_pet_shelter(user_id, pet.as_ref()).await? {
            return Err(AdoptionError::NotOwner {
                application_id,
                user_id,
            }
            .into());
        }

        Ok(AdoptionDto::from((application, pet)))
    }

    /// Gets all applications submitted by the user.
    pub async fn get_user_adoptions(&self, user_id: i32) -> Result<Vec<AdoptionDto>, Error> {
        let applications = AdoptionRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(applications.into_iter().map(AdoptionDto::from).collect())
    }

    /// Gets all applications for pets in the user's shelter.
    ///
    /// # Returns
    /// - `Ok(Vec<AdoptionDto>)` - Applications for the shelter's pets
    /// - `Err(Error::ShelterError(NotFoundForUser))` - User has no shelter
    pub async fn get_shelter_adoptions(&self, user_id: i32) -> Result<Vec<AdoptionDto>, Error> {
        let shelter = ShelterRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?
            .ok_or(ShelterError::NotFoundForUser(user_id))?;

        let applications = AdoptionRepository::new(self.db)
            .get_by_shelter_id(shelter.id)
            .await?;

        Ok(applications.into_iter().map(AdoptionDto::from).collect())
    }

    /// Sets the status of an application for a pet in the user's shelter.
    pub async fn update_adoption_status(
        &self,
        user_id: i32,
        application_id: i32,
        request: UpdateAdoptionStatusRequest,
    ) -> Result<AdoptionDto, Error> {
        let (_, pet) = self.find_application(application_id).await?;

        if !self.owns_pet_shelter(user_id, pet.as_ref()).await? {
            return Err(AdoptionError::NotOwner {
                application_id,
                user_id,
            }
            .into());
        }

        let application = AdoptionRepository::new(self.db)
            .update_status(application_id, request.status.into())
            .await?
            .ok_or(AdoptionError::NotFound(application_id))?;

        tracing::info!(
            user_id = %user_id,
            application_id = %application_id,
            status = ?request.status,
            "Updated adoption application status"
        );

        Ok(AdoptionDto::from((application, pet)))
    }

    /// Withdraws an application, only the applicant may do so.
    pub async fn remove_adoption(&self, user_id: i32, application_id: i32) -> Result<(), Error> {
        let (application, _) = self.find_application(application_id).await?;

        if application.user_id != user_id {
            return Err(AdoptionError::NotOwner {
                application_id,
                user_id,
            }
            .into());
        }

        AdoptionRepository::new(self.db)
            .delete(application_id)
            .await?;

        Ok(())
    }

    async fn find_application(&self, application_id: i32) -> Result<ApplicationWithPet, Error> {
        let application = AdoptionRepository::new(self.db)
            .get_with_pet(application_id)
            .await?
            .ok_or(AdoptionError::NotFound(application_id))?;

        Ok(application)
    }

    async fn owns_pet_shelter(
        &self,
        user_id: i32,
        pet: Option<&entity::pet::Model>,
    ) -> Result<bool, Error> {
        let Some(pet) = pet else {
            return Ok(false);
        };

        let shelter = ShelterRepository::new(self.db).get(pet.shelter_id).await?;

        Ok(shelter.is_some_and(|shelter| shelter.user_id == user_id))
    }
}

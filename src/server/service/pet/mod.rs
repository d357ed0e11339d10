//! Pet service layer.
//!
//! Pets are managed by the owner of the shelter listing them, ownership is always checked
//! through the pet's shelter.

#[cfg(test)]
mod tests;

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, IntoActiveModel};

use crate::{
    model::pet::{PetDto, RegisterPetRequest, UpdatePetRequest},
    server::{
        data::pet::PetRepository,
        error::{pet::PetError, validation::ValidationError, Error},
        service::shelter::find_owned_shelter,
        util::{date::parse_birthdate, validation::normalize_and_validate},
    },
};

/// Breed stored for pets registered without one
pub const DEFAULT_BREED: &str = "Undefined";
/// Description stored for pets registered without one
pub const DEFAULT_PET_DESCRIPTION: &str = "No description";

pub struct PetService<'a> {
    db: &'a DatabaseConnection,
    today: Option<NaiveDate>,
}

impl<'a> PetService<'a> {
    /// Creates a new instance of [`PetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db, today: None }
    }

    /// Pins the date birthdates are checked against instead of the current UTC date
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Registers a pet in a shelter owned by the user.
    ///
    /// # Returns
    /// - `Ok(PetDto)` - The registered pet with its shelter
    /// - `Err(Error::ValidationError)` - Request failed validation or birthdate is malformed/in the future
    /// - `Err(Error::ShelterError(NotFound))` - Shelter does not exist
    /// - `Err(Error::ShelterError(NotOwner))` - Shelter is owned by another user
    pub async fn register_pet(
        &self,
        user_id: i32,
        mut request: RegisterPetRequest,
    ) -> Result<PetDto, Error> {
        normalize_and_validate(&mut request)?;
        let birthdate =
            parse_birthdate(&request.birthdate, self.today()).map_err(ValidationError::from)?;

        let shelter = find_owned_shelter(self.db, user_id, request.shelter_id).await?;

        let pet_am = entity::pet::ActiveModel {
            name: ActiveValue::Set(request.name),
            birthdate: ActiveValue::Set(birthdate),
            gender: ActiveValue::Set(request.gender.into()),
            species: ActiveValue::Set(request.species.into()),
            breed: ActiveValue::Set(request.breed.unwrap_or_else(|| DEFAULT_BREED.to_string())),
            description: ActiveValue::Set(
                request
                    .description
                    .unwrap_or_else(|| DEFAULT_PET_DESCRIPTION.to_string()),
            ),
            image_url: ActiveValue::Set(request.image_url),
            is_neutered: ActiveValue::Set(request.is_neutered),
            has_pedigree: ActiveValue::Set(request.has_pedigree),
            shelter_id: ActiveValue::Set(shelter.id),
            ..Default::default()
        };

        let pet = PetRepository::new(self.db).create(pet_am).await?;

        tracing::info!(user_id = %user_id, shelter_id = %shelter.id, pet_id = %pet.id, "Registered pet");

        Ok(PetDto::from((pet, Some(shelter))))
    }

    /// Applies the present fields of `request` to a pet in a shelter owned by the user.
    pub async fn update_pet(
        &self,
        user_id: i32,
        pet_id: i32,
        mut request: UpdatePetRequest,
    ) -> Result<PetDto, Error> {
        normalize_and_validate(&mut request)?;
        let birthdate = request
            .birthdate
            .as_deref()
            .map(|birthdate| parse_birthdate(birthdate, self.today()))
            .transpose()
            .map_err(ValidationError::from)?;

        let (pet, shelter) = self.find_owned_pet(user_id, pet_id).await?;

        let mut pet_am = pet.clone().into_active_model();
        if let Some(name) = request.name {
            pet_am.name = ActiveValue::Set(name);
        }
        if let Some(birthdate) = birthdate {
            pet_am.birthdate = ActiveValue::Set(birthdate);
        }
        if let Some(gender) = request.gender {
            pet_am.gender = ActiveValue::Set(gender.into());
        }
        if let Some(species) = request.species {
            pet_am.species = ActiveValue::Set(species.into());
        }
        if let Some(breed) = request.breed {
            pet_am.breed = ActiveValue::Set(breed);
        }
        if let Some(description) = request.description {
            pet_am.description = ActiveValue::Set(description);
        }
        if let Some(image_url) = request.image_url {
            pet_am.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(is_neutered) = request.is_neutered {
            pet_am.is_neutered = ActiveValue::Set(is_neutered);
        }
        if let Some(has_pedigree) = request.has_pedigree {
            pet_am.has_pedigree = ActiveValue::Set(has_pedigree);
        }

        if !pet_am.is_changed() {
            return Ok(PetDto::from((pet, Some(shelter))));
        }

        let pet = PetRepository::new(self.db).update(pet_am).await?;

        Ok(PetDto::from((pet, Some(shelter))))
    }

    /// Removes a pet from a shelter owned by the user, along with its adoption applications.
    pub async fn remove_pet(&self, user_id: i32, pet_id: i32) -> Result<(), Error> {
        let (pet, _) = self.find_owned_pet(user_id, pet_id).await?;

        PetRepository::new(self.db).delete(pet.id).await?;

        tracing::info!(user_id = %user_id, pet_id = %pet.id, "Removed pet");

        Ok(())
    }

    /// Gets a pet with a summary of its shelter.
    pub async fn get_pet(&self, pet_id: i32) -> Result<PetDto, Error> {
        let pet = PetRepository::new(self.db)
            .get_with_shelter(pet_id)
            .await?
            .ok_or(PetError::NotFound(pet_id))?;

        Ok(pet.into())
    }

    /// Gets all pets with summaries of their shelters.
    pub async fn get_all_pets(&self) -> Result<Vec<PetDto>, Error> {
        let pets = PetRepository::new(self.db).get_all_with_shelter().await?;

        Ok(pets.into_iter().map(PetDto::from).collect())
    }

    async fn find_owned_pet(
        &self,
        user_id: i32,
        pet_id: i32,
    ) -> Result<(entity::pet::Model, entity::shelter::Model), Error> {
        let pet = PetRepository::new(self.db)
            .get(pet_id)
            .await?
            .ok_or(PetError::NotFound(pet_id))?;

        let shelter = find_owned_shelter(self.db, user_id, pet.shelter_id).await?;

        Ok((pet, shelter))
    }
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::shelter::ShelterInfoDto;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[default]
    Unknown,
    Male,
    Female,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Species {
    #[default]
    Undefined,
    Cat,
    Dog,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterPetRequest {
    #[validate(length(min = 1, max = 50, message = "Pet name must be between 1 and 50 characters"))]
    pub name: String,
    /// Date of birth formatted as `yyyy-MM-dd`
    pub birthdate: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub species: Species,
    #[validate(length(min = 1, max = 50, message = "Breed must be between 1 and 50 characters"))]
    pub breed: Option<String>,
    #[validate(length(min = 1, max = 1000, message = "Description must be between 1 and 1000 characters"))]
    pub description: Option<String>,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_neutered: bool,
    #[serde(default)]
    pub has_pedigree: bool,
    pub shelter_id: i32,
}

/// Partial pet update, omitted fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdatePetRequest {
    #[validate(length(min = 1, max = 50, message = "Pet name must be between 1 and 50 characters"))]
    pub name: Option<String>,
    /// Date of birth formatted as `yyyy-MM-dd`
    pub birthdate: Option<String>,
    pub gender: Option<Gender>,
    pub species: Option<Species>,
    #[validate(length(min = 1, max = 50, message = "Breed must be between 1 and 50 characters"))]
    pub breed: Option<String>,
    #[validate(length(min = 1, max = 1000, message = "Description must be between 1 and 1000 characters"))]
    pub description: Option<String>,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,
    pub is_neutered: Option<bool>,
    pub has_pedigree: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PetDto {
    pub id: i32,
    pub name: String,
    pub birthdate: NaiveDate,
    pub gender: Gender,
    pub species: Species,
    pub breed: String,
    pub description: String,
    pub image_url: Option<String>,
    pub is_neutered: bool,
    pub has_pedigree: bool,
    pub shelter_id: i32,
    pub created_at: NaiveDateTime,
    pub shelter: Option<ShelterInfoDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PetSummaryDto {
    pub id: i32,
    pub name: String,
    pub birthdate: NaiveDate,
    pub gender: Gender,
    pub species: Species,
    pub image_url: Option<String>,
}

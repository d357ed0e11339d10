use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::pet::PetSummaryDto;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterShelterRequest {
    #[validate(length(min = 3, max = 50, message = "Shelter name must be between 3 and 50 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 1000, message = "Description must be between 1 and 1000 characters"))]
    pub description: Option<String>,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
}

/// Partial shelter update, omitted fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateShelterRequest {
    #[validate(length(min = 3, max = 50, message = "Shelter name must be between 3 and 50 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 1000, message = "Description must be between 1 and 1000 characters"))]
    pub description: Option<String>,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShelterDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub email: String,
    pub user_id: i32,
}

/// A shelter along with every pet it lists
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShelterDetailDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub email: String,
    pub user_id: i32,
    pub pets: Vec<PetSummaryDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShelterSummaryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub email: String,
    pub pet_count: u64,
}

/// Shelter contact information embedded in pet responses
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShelterInfoDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub email: String,
}

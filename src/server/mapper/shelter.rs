use crate::model::{
    pet::PetSummaryDto,
    shelter::{ShelterDetailDto, ShelterDto, ShelterInfoDto, ShelterSummaryDto},
};

impl From<entity::shelter::Model> for ShelterDto {
    fn from(model: entity::shelter::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            email: model.email,
            user_id: model.user_id,
        }
    }
}

impl From<entity::shelter::Model> for ShelterInfoDto {
    fn from(model: entity::shelter::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            email: model.email,
        }
    }
}

impl From<(entity::shelter::Model, Vec<entity::pet::Model>)> for ShelterDetailDto {
    fn from((shelter, pets): (entity::shelter::Model, Vec<entity::pet::Model>)) -> Self {
        Self {
            id: shelter.id,
            name: shelter.name,
            description: shelter.description,
            email: shelter.email,
            user_id: shelter.user_id,
            pets: pets.into_iter().map(PetSummaryDto::from).collect(),
        }
    }
}

impl From<(entity::shelter::Model, u64)> for ShelterSummaryDto {
    fn from((shelter, pet_count): (entity::shelter::Model, u64)) -> Self {
        Self {
            id: shelter.id,
            name: shelter.name,
            description: shelter.description,
            email: shelter.email,
            pet_count,
        }
    }
}

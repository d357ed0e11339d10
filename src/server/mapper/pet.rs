use entity::sea_orm_active_enums as db;

use crate::model::pet::{Gender, PetDto, PetSummaryDto, Species};

impl From<db::Gender> for Gender {
    fn from(gender: db::Gender) -> Self {
        match gender {
            db::Gender::Unknown => Self::Unknown,
            db::Gender::Male => Self::Male,
            db::Gender::Female => Self::Female,
        }
    }
}

impl From<Gender> for db::Gender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Unknown => Self::Unknown,
            Gender::Male => Self::Male,
            Gender::Female => Self::Female,
        }
    }
}

impl From<db::Species> for Species {
    fn from(species: db::Species) -> Self {
        match species {
            db::Species::Undefined => Self::Undefined,
            db::Species::Cat => Self::Cat,
            db::Species::Dog => Self::Dog,
        }
    }
}

impl From<Species> for db::Species {
    fn from(species: Species) -> Self {
        match species {
            Species::Undefined => Self::Undefined,
            Species::Cat => Self::Cat,
            Species::Dog => Self::Dog,
        }
    }
}

/// Pet with the summary of the shelter listing it, if it was loaded
impl From<(entity::pet::Model, Option<entity::shelter::Model>)> for PetDto {
    fn from((pet, shelter): (entity::pet::Model, Option<entity::shelter::Model>)) -> Self {
        Self {
            id: pet.id,
            name: pet.name,
            birthdate: pet.birthdate,
            gender: pet.gender.into(),
            species: pet.species.into(),
            breed: pet.breed,
            description: pet.description,
            image_url: pet.image_url,
            is_neutered: pet.is_neutered,
            has_pedigree: pet.has_pedigree,
            shelter_id: pet.shelter_id,
            created_at: pet.created_at,
            shelter: shelter.map(Into::into),
        }
    }
}

impl From<entity::pet::Model> for PetDto {
    fn from(pet: entity::pet::Model) -> Self {
        Self::from((pet, None))
    }
}

impl From<entity::pet::Model> for PetSummaryDto {
    fn from(pet: entity::pet::Model) -> Self {
        Self {
            id: pet.id,
            name: pet.name,
            birthdate: pet.birthdate,
            gender: pet.gender.into(),
            species: pet.species.into(),
            image_url: pet.image_url,
        }
    }
}

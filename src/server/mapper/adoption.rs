use entity::sea_orm_active_enums as db;

use crate::model::adoption::{AdoptionDto, AdoptionStatus};

impl From<db::AdoptionStatus> for AdoptionStatus {
    fn from(status: db::AdoptionStatus) -> Self {
        match status {
            db::AdoptionStatus::Pending => Self::Pending,
            db::AdoptionStatus::Declined => Self::Declined,
            db::AdoptionStatus::Approved => Self::Approved,
        }
    }
}

impl From<AdoptionStatus> for db::AdoptionStatus {
    fn from(status: AdoptionStatus) -> Self {
        match status {
            AdoptionStatus::Pending => Self::Pending,
            AdoptionStatus::Declined => Self::Declined,
            AdoptionStatus::Approved => Self::Approved,
        }
    }
}

impl From<(entity::adoption_application::Model, Option<entity::pet::Model>)> for AdoptionDto {
    fn from(
        (application, pet): (entity::adoption_application::Model, Option<entity::pet::Model>),
    ) -> Self {
        Self {
            id: application.id,
            created_at: application.created_at,
            status: application.status.into(),
            user_id: application.user_id,
            pet_id: application.pet_id,
            pet_name: pet.map(|pet| pet.name),
        }
    }
}

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{Gender, Species};
use sea_orm::{ActiveValue, DbErr, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn pet<'a>(&'a mut self) -> PetFixtures<'a> {
        PetFixtures { context: self }
    }
}

pub struct PetFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> PetFixtures<'a> {
    /// Inserts a dog born on 2020-01-01 into the shelter
    pub async fn insert_pet(&mut self, shelter_id: i32) -> Result<entity::pet::Model, TestError> {
        let sequence = self.context.next_sequence();
        let birthdate = NaiveDate::from_ymd_opt(2020, 1, 1)
            .ok_or_else(|| DbErr::Custom("invalid fixture birthdate".to_string()))?;

        Ok(entity::prelude::Pet::insert(entity::pet::ActiveModel {
            name: ActiveValue::Set(format!("Pet {}", sequence)),
            birthdate: ActiveValue::Set(birthdate),
            gender: ActiveValue::Set(Gender::Male),
            species: ActiveValue::Set(Species::Dog),
            breed: ActiveValue::Set("Labrador".to_string()),
            description: ActiveValue::Set("Loves long walks".to_string()),
            image_url: ActiveValue::Set(None),
            is_neutered: ActiveValue::Set(true),
            has_pedigree: ActiveValue::Set(false),
            shelter_id: ActiveValue::Set(shelter_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}

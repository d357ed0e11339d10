use chrono::Utc;
use entity::sea_orm_active_enums::AdoptionStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn adoption<'a>(&'a mut self) -> AdoptionFixtures<'a> {
        AdoptionFixtures { context: self }
    }
}

pub struct AdoptionFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> AdoptionFixtures<'a> {
    /// Inserts a pending adoption application by `user_id` for `pet_id`
    pub async fn insert_adoption(
        &self,
        user_id: i32,
        pet_id: i32,
    ) -> Result<entity::adoption_application::Model, TestError> {
        Ok(entity::prelude::AdoptionApplication::insert(
            entity::adoption_application::ActiveModel {
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                status: ActiveValue::Set(AdoptionStatus::Pending),
                user_id: ActiveValue::Set(user_id),
                pet_id: ActiveValue::Set(pet_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }
}

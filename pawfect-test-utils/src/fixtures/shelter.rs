use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_SHELTER_OWNER_ROLE, error::TestError, TestContext};

impl TestContext {
    pub fn shelter<'a>(&'a mut self) -> ShelterFixtures<'a> {
        ShelterFixtures { context: self }
    }
}

pub struct ShelterFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> ShelterFixtures<'a> {
    /// Inserts a shelter owned by `user_id` without granting the owner role
    pub async fn insert_shelter(
        &mut self,
        user_id: i32,
    ) -> Result<entity::shelter::Model, TestError> {
        let sequence = self.context.next_sequence();

        Ok(
            entity::prelude::Shelter::insert(entity::shelter::ActiveModel {
                name: ActiveValue::Set(format!("Shelter {}", sequence)),
                description: ActiveValue::Set("A friendly shelter".to_string()),
                email: ActiveValue::Set(format!("shelter{}@example.com", sequence)),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Inserts a user holding the ShelterOwner role together with their shelter
    pub async fn insert_shelter_owner(
        &mut self,
    ) -> Result<(entity::user::Model, entity::shelter::Model), TestError> {
        let user_model = self.context.user().insert_user().await?;
        self.context
            .user()
            .insert_role(user_model.id, TEST_SHELTER_OWNER_ROLE)
            .await?;
        let shelter_model = self.insert_shelter(user_model.id).await?;

        Ok((user_model, shelter_model))
    }
}

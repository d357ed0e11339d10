use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct ShelterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShelterRepository<'a, C> {
    /// Creates a new instance of [`ShelterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new shelter owned by `user_id`
    ///
    /// Fails with a unique constraint violation if the user already owns a shelter.
    pub async fn create(
        &self,
        user_id: i32,
        name: String,
        description: String,
        email: String,
    ) -> Result<entity::shelter::Model, DbErr> {
        let shelter = entity::shelter::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            email: ActiveValue::Set(email),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        shelter.insert(self.db).await
    }

    pub async fn get(&self, shelter_id: i32) -> Result<Option<entity::shelter::Model>, DbErr> {
        entity::prelude::Shelter::find_by_id(shelter_id)
            .one(self.db)
            .await
    }

    /// Gets the shelter owned by the user, if any
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::shelter::Model>, DbErr> {
        entity::prelude::Shelter::find()
            .filter(entity::shelter::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets a shelter together with all of its pets
    pub async fn get_with_pets(
        &self,
        shelter_id: i32,
    ) -> Result<Option<(entity::shelter::Model, Vec<entity::pet::Model>)>, DbErr> {
        let shelters = entity::prelude::Shelter::find_by_id(shelter_id)
            .find_with_related(entity::pet::Entity)
            .all(self.db)
            .await?;

        Ok(shelters.into_iter().next())
    }

    /// Gets every shelter with the number of pets it lists, ordered by shelter ID
    pub async fn get_all_with_pet_counts(
        &self,
    ) -> Result<Vec<(entity::shelter::Model, u64)>, DbErr> {
        let shelters = entity::prelude::Shelter::find()
            .order_by_asc(entity::shelter::Column::Id)
            .all(self.db)
            .await?;

        let pet_counts: HashMap<i32, i64> = entity::prelude::Pet::find()
            .select_only()
            .column(entity::pet::Column::ShelterId)
            .column_as(entity::pet::Column::Id.count(), "pet_count")
            .group_by(entity::pet::Column::ShelterId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        Ok(shelters
            .into_iter()
            .map(|shelter| {
                let count = pet_counts.get(&shelter.id).copied().unwrap_or(0);
                (shelter, count.max(0) as u64)
            })
            .collect())
    }

    /// Persists changes made to a shelter's active model
    pub async fn update(
        &self,
        shelter: entity::shelter::ActiveModel,
    ) -> Result<entity::shelter::Model, DbErr> {
        shelter.update(self.db).await
    }

    /// Deletes a shelter along with its pets and their adoption applications
    ///
    /// Returns OK regardless of shelter existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, shelter_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Shelter::delete_by_id(shelter_id)
            .exec(self.db)
            .await
    }
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryOrder,
};

pub struct PetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PetRepository<'a, C> {
    /// Creates a new instance of [`PetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new pet, stamping its creation time
    pub async fn create(
        &self,
        mut pet: entity::pet::ActiveModel,
    ) -> Result<entity::pet::Model, DbErr> {
        pet.created_at = ActiveValue::Set(Utc::now().naive_utc());

        pet.insert(self.db).await
    }

    pub async fn get(&self, pet_id: i32) -> Result<Option<entity::pet::Model>, DbErr> {
        entity::prelude::Pet::find_by_id(pet_id).one(self.db).await
    }

    /// Gets a pet together with the shelter listing it
    pub async fn get_with_shelter(
        &self,
        pet_id: i32,
    ) -> Result<Option<(entity::pet::Model, Option<entity::shelter::Model>)>, DbErr> {
        entity::prelude::Pet::find_by_id(pet_id)
            .find_also_related(entity::shelter::Entity)
            .one(self.db)
            .await
    }

    /// Gets every pet with its shelter, ordered by pet ID
    pub async fn get_all_with_shelter(
        &self,
    ) -> Result<Vec<(entity::pet::Model, Option<entity::shelter::Model>)>, DbErr> {
        entity::prelude::Pet::find()
            .find_also_related(entity::shelter::Entity)
            .order_by_asc(entity::pet::Column::Id)
            .all(self.db)
            .await
    }

    /// Persists changes made to a pet's active model
    pub async fn update(&self, pet: entity::pet::ActiveModel) -> Result<entity::pet::Model, DbErr> {
        pet.update(self.db).await
    }

    /// Deletes a pet along with its adoption applications
    ///
    /// Returns OK regardless of pet existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, pet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pet::delete_by_id(pet_id).exec(self.db).await
    }
}

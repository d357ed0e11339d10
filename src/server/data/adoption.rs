use chrono::Utc;
use entity::sea_orm_active_enums::AdoptionStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// An adoption application paired with the pet it is for
pub type ApplicationWithPet = (
    entity::adoption_application::Model,
    Option<entity::pet::Model>,
);

pub struct AdoptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdoptionRepository<'a, C> {
    /// Creates a new instance of [`AdoptionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new pending adoption application by `user_id` for `pet_id`
    pub async fn create(
        &self,
        user_id: i32,
        pet_id: i32,
    ) -> Result<entity::adoption_application::Model, DbErr> {
        let application = entity::adoption_application::ActiveModel {
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            status: ActiveValue::Set(AdoptionStatus::Pending),
            user_id: ActiveValue::Set(user_id),
            pet_id: ActiveValue::Set(pet_id),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    pub async fn get_with_pet(
        &self,
        application_id: i32,
    ) -> Result<Option<ApplicationWithPet>, DbErr> {
        entity::prelude::AdoptionApplication::find_by_id(application_id)
            .find_also_related(entity::pet::Entity)
            .one(self.db)
            .await
    }

    /// Gets all applications submitted by the user, oldest first
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<ApplicationWithPet>, DbErr> {
        entity::prelude::AdoptionApplication::find()
            .filter(entity::adoption_application::Column::UserId.eq(user_id))
            .find_also_related(entity::pet::Entity)
            .order_by_asc(entity::adoption_application::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all applications for pets listed by the shelter, oldest first
    pub async fn get_by_shelter_id(
        &self,
        shelter_id: i32,
    ) -> Result<Vec<ApplicationWithPet>, DbErr> {
        entity::prelude::AdoptionApplication::find()
            .find_also_related(entity::pet::Entity)
            .filter(entity::pet::Column::ShelterId.eq(shelter_id))
            .order_by_asc(entity::adoption_application::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the status of an application
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated application
    /// - `Ok(None)` - No application with that ID exists
    pub async fn update_status(
        &self,
        application_id: i32,
        status: AdoptionStatus,
    ) -> Result<Option<entity::adoption_application::Model>, DbErr> {
        let application = match entity::prelude::AdoptionApplication::find_by_id(application_id)
            .one(self.db)
            .await?
        {
            Some(application) => application,
            None => return Ok(None),
        };

        let mut application_am = application.into_active_model();
        application_am.status = ActiveValue::Set(status);

        let application = application_am.update(self.db).await?;

        Ok(Some(application))
    }

    /// Deletes an application
    ///
    /// Returns OK regardless of application existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, application_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AdoptionApplication::delete_by_id(application_id)
            .exec(self.db)
            .await
    }
}

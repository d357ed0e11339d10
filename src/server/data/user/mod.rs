pub mod user_role;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// # Arguments
    /// - `email`: Unique login email of the user
    /// - `password_hash`: PHC formatted argon2 hash of the user's password
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            first_name: ActiveValue::Set(first_name),
            last_name: ActiveValue::Set(last_name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Deletes a user along with their roles, shelter, and adoption applications
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}

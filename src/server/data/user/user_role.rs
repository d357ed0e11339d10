use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter,
};

pub struct UserRoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRoleRepository<'a, C> {
    /// Creates a new instance of [`UserRoleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Grants a role to a user
    ///
    /// The (user_id, role) pair is unique, inserting a role the user already holds fails.
    pub async fn create(
        &self,
        user_id: i32,
        role: &str,
    ) -> Result<entity::user_role::Model, DbErr> {
        let user_role = entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user_role.insert(self.db).await
    }

    /// Gets all role entries held by the user
    pub async fn get_roles(&self, user_id: i32) -> Result<Vec<entity::user_role::Model>, DbErr> {
        entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    pub async fn exists(&self, user_id: i32, role: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::Role.eq(role))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Removes a role from a user
    ///
    /// Returns OK regardless of the role being held, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32, role: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::Role.eq(role))
            .exec(self.db)
            .await
    }
}

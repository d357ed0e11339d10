use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts a user with a unique email and a placeholder password hash that never verifies
    pub async fn insert_user(&mut self) -> Result<entity::user::Model, TestError> {
        let sequence = self.context.next_sequence();
        let email = format!("user{}@example.com", sequence);

        self.insert_with_hash(&email, "not-a-password-hash".to_string())
            .await
    }

    /// Inserts a user whose password hash verifies against `password`
    pub async fn insert_user_with_password(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<entity::user::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        self.insert_with_hash(email, password_hash).await
    }

    pub async fn insert_role(
        &self,
        user_id: i32,
        role: &str,
    ) -> Result<entity::user_role::Model, TestError> {
        Ok(
            entity::prelude::UserRole::insert(entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                role: ActiveValue::Set(role.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    async fn insert_with_hash(
        &self,
        email: &str,
        password_hash: String,
    ) -> Result<entity::user::Model, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                first_name: ActiveValue::Set("Test".to_string()),
                last_name: ActiveValue::Set("User".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}

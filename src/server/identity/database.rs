use async_trait::async_trait;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::{user_role::UserRoleRepository, UserRepository},
    error::{identity::IdentityError, validation::FieldError, Error},
    identity::{
        password::{check_password_policy, hash_password, verify_password},
        Identity, IdentityProvider, NewAccount, Role,
    },
};

/// Identity provider storing accounts and roles in the application database.
#[derive(Clone)]
pub struct DatabaseIdentityProvider {
    db: DatabaseConnection,
}

impl DatabaseIdentityProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn email_taken(email: &str) -> FieldError {
    FieldError::new("email", format!("Email '{}' is already taken", email))
}

#[async_trait]
impl IdentityProvider for DatabaseIdentityProvider {
    async fn create_account(&self, account: NewAccount) -> Result<entity::user::Model, Error> {
        let user_repo = UserRepository::new(&self.db);

        let mut rejected = Vec::new();
        if user_repo.find_by_email(&account.email).await?.is_some() {
            rejected.push(email_taken(&account.email));
        }
        rejected.extend(check_password_policy(&account.password));

        if !rejected.is_empty() {
            return Err(IdentityError::Rejected(rejected).into());
        }

        let password = account.password;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| Error::InternalError(format!("Password hashing task failed: {}", e)))?
            .map_err(IdentityError::from)?;

        match user_repo
            .create(
                account.email.clone(),
                password_hash,
                account.first_name,
                account.last_name,
            )
            .await
        {
            Ok(user) => Ok(user),
            // Lost a race with a concurrent registration for the same email
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(IdentityError::Rejected(vec![email_taken(&account.email)]).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<entity::user::Model>, Error> {
        let user_repo = UserRepository::new(&self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Ok(None);
        };

        let password = password.to_string();
        let password_hash = user.password_hash.clone();
        let verified =
            tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
                .await
                .map_err(|e| {
                    Error::InternalError(format!("Password verification task failed: {}", e))
                })?
                .map_err(IdentityError::from)?;

        Ok(verified.then_some(user))
    }

    async fn resolve(&self, user_id: i32) -> Result<Option<Identity>, Error> {
        let user_repo = UserRepository::new(&self.db);
        let role_repo = UserRoleRepository::new(&self.db);

        if user_repo.get(user_id).await?.is_none() {
            return Ok(None);
        }

        let mut roles = Vec::new();
        for user_role in role_repo.get_roles(user_id).await? {
            match user_role.role.parse::<Role>() {
                Ok(role) => roles.push(role),
                Err(e) => tracing::warn!(user_id = %user_id, "Ignoring stored role: {}", e),
            }
        }

        Ok(Some(Identity { user_id, roles }))
    }

    async fn grant_role(&self, user_id: i32, role: Role) -> Result<(), Error> {
        let role_repo = UserRoleRepository::new(&self.db);

        if role_repo.exists(user_id, role.as_str()).await? {
            return Ok(());
        }

        role_repo.create(user_id, role.as_str()).await?;

        Ok(())
    }

    async fn revoke_role(&self, user_id: i32, role: Role) -> Result<(), Error> {
        let role_repo = UserRoleRepository::new(&self.db);

        role_repo.delete(user_id, role.as_str()).await?;

        Ok(())
    }
}

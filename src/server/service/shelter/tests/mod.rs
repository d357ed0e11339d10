mod register_shelter;

use std::{
    sync::atomic::{AtomicU32, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use pawfect_test_utils::prelude::*;

use crate::server::{
    error::{identity::IdentityError, shelter::ShelterError, Error},
    identity::{DatabaseIdentityProvider, Identity, IdentityProvider, NewAccount, Role},
    service::{
        retry::RetryContext,
        shelter::{RoleRevocation, ShelterService},
    },
};

/// Identity provider whose role grants and the first `failures` revocations fail as if the
/// identity store were unreachable.
struct FlakyIdentityProvider {
    inner: DatabaseIdentityProvider,
    failures: u32,
    failure: fn() -> Error,
    revoke_calls: AtomicU32,
}

fn identity_store_offline() -> Error {
    IdentityError::Unavailable("identity store offline".to_string()).into()
}

impl FlakyIdentityProvider {
    fn new(test: &TestContext, failures: u32) -> Self {
        Self {
            inner: DatabaseIdentityProvider::new(test.db.clone()),
            failures,
            failure: identity_store_offline,
            revoke_calls: AtomicU32::new(0),
        }
    }

    /// Fail revocations with `failure` instead of an identity store outage
    fn with_failure(mut self, failure: fn() -> Error) -> Self {
        self.failure = failure;
        self
    }

    fn revoke_calls(&self) -> u32 {
        self.revoke_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for FlakyIdentityProvider {
    async fn create_account(&self, account: NewAccount) -> Result<entity::user::Model, Error> {
        self.inner.create_account(account).await
    }

    async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<entity::user::Model>, Error> {
        self.inner.verify_credentials(email, password).await
    }

    async fn resolve(&self, user_id: i32) -> Result<Option<Identity>, Error> {
        self.inner.resolve(user_id).await
    }

    async fn grant_role(&self, _user_id: i32, _role: Role) -> Result<(), Error> {
        Err(identity_store_offline())
    }

    async fn revoke_role(&self, user_id: i32, role: Role) -> Result<(), Error> {
        let call = self.revoke_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.failures {
            return Err((self.failure)());
        }

        self.inner.revoke_role(user_id, role).await
    }
}

fn fast_retry() -> RetryContext {
    RetryContext::new().with_initial_backoff(Duration::from_millis(1))
}

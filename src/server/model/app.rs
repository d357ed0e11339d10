use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::identity::{DatabaseIdentityProvider, IdentityProvider};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Application state backed by the database identity provider
    pub fn new(db: DatabaseConnection) -> Self {
        let identity = Arc::new(DatabaseIdentityProvider::new(db.clone()));

        Self { db, identity }
    }
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}

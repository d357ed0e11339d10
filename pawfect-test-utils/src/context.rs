//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment with an in-memory SQLite database and a memory-backed session.
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for authentication flows
    pub session: Session,

    /// Counter used to generate unique fixture values such as emails
    pub(crate) sequence: u32,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without a circular dependency between the
    /// test-utils crate and the main crate.
    ///
    /// ```ignore
    /// let state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            session,
            sequence: 0,
        })
    }

    pub(crate) async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub(crate) fn next_sequence(&mut self) -> u32 {
        self.sequence += 1;
        self.sequence
    }
}

//! Declarative test builder.
//!
//! Table creation is queued on the builder and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// # Example
///
/// ```ignore
/// let mut test = TestBuilder::new().with_pet_tables().build().await?;
/// let (user, shelter) = test.shelter().insert_shelter_owner().await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_pet_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_pet_tables: false,
        }
    }

    /// Add every table of the adoption domain to the test database.
    ///
    /// Creates User, UserRole, Shelter, Pet, and AdoptionApplication in foreign key order.
    pub fn with_pet_tables(mut self) -> Self {
        self.include_pet_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Tables are created in the order they are added, after the pet tables if
    /// [`Self::with_pet_tables`] was also used.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context, creating all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an in-memory database containing the tables
    /// - `Err(TestError::DbErr)` - Connecting to SQLite or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_pet_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::UserRole),
                schema.create_table_from_entity(entity::prelude::Shelter),
                schema.create_table_from_entity(entity::prelude::Pet),
                schema.create_table_from_entity(entity::prelude::AdoptionApplication),
            ]);
        }

        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub use sea_orm_migration::prelude::*;

mod m20250507_000001_user;
mod m20250507_000002_user_role;
mod m20250507_000003_shelter;
mod m20250507_000004_pet;
mod m20250507_000005_adoption_application;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250507_000001_user::Migration),
            Box::new(m20250507_000002_user_role::Migration),
            Box::new(m20250507_000003_shelter::Migration),
            Box::new(m20250507_000004_pet::Migration),
            Box::new(m20250507_000005_adoption_application::Migration),
        ]
    }
}

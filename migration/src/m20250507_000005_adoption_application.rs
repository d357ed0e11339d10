use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250507_000001_user::User, m20250507_000004_pet::Pet};

static IDX_ADOPTION_APPLICATION_USER_ID: &str = "idx-adoption_application-user_id";
static IDX_ADOPTION_APPLICATION_PET_ID: &str = "idx-adoption_application-pet_id";
static FK_ADOPTION_APPLICATION_USER_ID: &str = "fk-adoption_application-user_id";
static FK_ADOPTION_APPLICATION_PET_ID: &str = "fk-adoption_application-pet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdoptionApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(AdoptionApplication::Id))
                    .col(timestamp(AdoptionApplication::CreatedAt))
                    .col(string(AdoptionApplication::Status))
                    .col(integer(AdoptionApplication::UserId))
                    .col(integer(AdoptionApplication::PetId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ADOPTION_APPLICATION_USER_ID)
                    .table(AdoptionApplication::Table)
                    .col(AdoptionApplication::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ADOPTION_APPLICATION_PET_ID)
                    .table(AdoptionApplication::Table)
                    .col(AdoptionApplication::PetId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ADOPTION_APPLICATION_USER_ID)
                    .from_tbl(AdoptionApplication::Table)
                    .from_col(AdoptionApplication::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Applications go away with the pet they reference
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ADOPTION_APPLICATION_PET_ID)
                    .from_tbl(AdoptionApplication::Table)
                    .from_col(AdoptionApplication::PetId)
                    .to_tbl(Pet::Table)
                    .to_col(Pet::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ADOPTION_APPLICATION_PET_ID)
                    .table(AdoptionApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ADOPTION_APPLICATION_USER_ID)
                    .table(AdoptionApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ADOPTION_APPLICATION_PET_ID)
                    .table(AdoptionApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ADOPTION_APPLICATION_USER_ID)
                    .table(AdoptionApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AdoptionApplication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AdoptionApplication {
    Table,
    Id,
    CreatedAt,
    Status,
    UserId,
    PetId,
}

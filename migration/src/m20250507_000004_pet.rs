use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250507_000003_shelter::Shelter;

static IDX_PET_SHELTER_ID: &str = "idx-pet-shelter_id";
static FK_PET_SHELTER_ID: &str = "fk-pet-shelter_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(pk_auto(Pet::Id))
                    .col(string(Pet::Name))
                    .col(date(Pet::Birthdate))
                    .col(string(Pet::Gender))
                    .col(string(Pet::Species))
                    .col(string(Pet::Breed))
                    .col(text(Pet::Description))
                    .col(string_null(Pet::ImageUrl))
                    .col(boolean(Pet::IsNeutered))
                    .col(boolean(Pet::HasPedigree))
                    .col(integer(Pet::ShelterId))
                    .col(timestamp(Pet::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PET_SHELTER_ID)
                    .table(Pet::Table)
                    .col(Pet::ShelterId)
                    .to_owned(),
            )
            .await?;

        // Deleting a shelter removes its pets
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PET_SHELTER_ID)
                    .from_tbl(Pet::Table)
                    .from_col(Pet::ShelterId)
                    .to_tbl(Shelter::Table)
                    .to_col(Shelter::Id)
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
                    .name(FK_PET_SHELTER_ID)
                    .table(Pet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_PET_SHELTER_ID).table(Pet::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Pet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Pet {
    Table,
    Id,
    Name,
    Birthdate,
    Gender,
    Species,
    Breed,
    Description,
    ImageUrl,
    IsNeutered,
    HasPedigree,
    ShelterId,
    CreatedAt,
}

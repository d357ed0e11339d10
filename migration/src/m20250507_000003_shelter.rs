use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250507_000001_user::User;

static FK_SHELTER_USER_ID: &str = "fk-shelter-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shelter::Table)
                    .if_not_exists()
                    .col(pk_auto(Shelter::Id))
                    .col(string_len(Shelter::Name, 50))
                    .col(text(Shelter::Description))
                    .col(string(Shelter::Email))
                    // One shelter per user
                    .col(integer_uniq(Shelter::UserId))
                    .col(timestamp(Shelter::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SHELTER_USER_ID)
                    .from_tbl(Shelter::Table)
                    .from_col(Shelter::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
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
                    .name(FK_SHELTER_USER_ID)
                    .table(Shelter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Shelter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Shelter {
    Table,
    Id,
    Name,
    Description,
    Email,
    UserId,
    CreatedAt,
}

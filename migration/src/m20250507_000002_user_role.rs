use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250507_000001_user::User;

static IDX_USER_ROLE_USER_ID_ROLE: &str = "idx-user_role-user_id-role";
static FK_USER_ROLE_USER_ID: &str = "fk-user_role-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserRole::Table)
                    .if_not_exists()
                    .col(pk_auto(UserRole::Id))
                    .col(integer(UserRole::UserId))
                    .col(string(UserRole::Role))
                    .col(timestamp(UserRole::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_ROLE_USER_ID_ROLE)
                    .table(UserRole::Table)
                    .col(UserRole::UserId)
                    .col(UserRole::Role)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_ROLE_USER_ID)
                    .from_tbl(UserRole::Table)
                    .from_col(UserRole::UserId)
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
                    .name(FK_USER_ROLE_USER_ID)
                    .table(UserRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_ROLE_USER_ID_ROLE)
                    .table(UserRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserRole::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserRole {
    Table,
    Id,
    UserId,
    Role,
    CreatedAt,
}

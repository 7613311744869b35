use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stories::Table)
                    .if_not_exists()
                    .col(pk_auto(Stories::Id))
                    .col(integer(Stories::UserId))
                    .col(string(Stories::Title))
                    .col(text(Stories::Content))
                    .col(boolean(Stories::IsFavorite).default(false))
                    .col(
                        timestamp_with_time_zone(Stories::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stories_user_id")
                            .from(Stories::Table, Stories::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stories_user_id")
                    .table(Stories::Table)
                    .col(Stories::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Stories {
    Table,
    Id,
    UserId,
    Title,
    Content,
    IsFavorite,
    CreatedAt,
}

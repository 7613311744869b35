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
                    .table(ApiUsage::Table)
                    .if_not_exists()
                    .col(pk_auto(ApiUsage::Id))
                    .col(integer_uniq(ApiUsage::UserId))
                    .col(integer(ApiUsage::ApiCalls).default(20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_api_usage_user_id")
                            .from(ApiUsage::Table, ApiUsage::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApiUsage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApiUsage {
    Table,
    Id,
    UserId,
    ApiCalls,
}

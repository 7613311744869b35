use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(string(Resource::Endpoint))
                    .col(string(Resource::Method))
                    .col(big_integer(Resource::Requests).default(0))
                    .primary_key(
                        Index::create()
                            .name("pk_resource")
                            .col(Resource::Endpoint)
                            .col(Resource::Method),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Resource {
    Table,
    Endpoint,
    Method,
    Requests,
}

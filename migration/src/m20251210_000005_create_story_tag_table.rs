use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000003_create_story_table::Stories;
use super::m20251210_000004_create_tag_table::Tags;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoryTags::Table)
                    .if_not_exists()
                    .col(integer(StoryTags::StoryId))
                    .col(integer(StoryTags::TagId))
                    .primary_key(
                        Index::create()
                            .name("pk_story_tags")
                            .col(StoryTags::StoryId)
                            .col(StoryTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_tags_story_id")
                            .from(StoryTags::Table, StoryTags::StoryId)
                            .to(Stories::Table, Stories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_tags_tag_id")
                            .from(StoryTags::Table, StoryTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoryTags::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StoryTags {
    Table,
    StoryId,
    TagId,
}

//! Tag factory for creating tags and story-tag links.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Creates a tag with the given name.
pub async fn create_tag(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links an existing tag to an existing story.
pub async fn link_tag(db: &DatabaseConnection, story_id: i32, tag_id: i32) -> Result<(), DbErr> {
    entity::prelude::StoryTag::insert(entity::story_tag::ActiveModel {
        story_id: ActiveValue::Set(story_id),
        tag_id: ActiveValue::Set(tag_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}

//! Story factory for creating test story entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let story = StoryFactory::new(&db, user.id)
///     .title("The Lighthouse")
///     .favorite(true)
///     .build()
///     .await?;
/// ```
pub struct StoryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    content: String,
    is_favorite: bool,
    created_at: DateTime<Utc>,
}

impl<'a> StoryFactory<'a> {
    /// Creates a new StoryFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Story {id}"`
    /// - content: two short paragraphs
    /// - is_favorite: `false`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Story {}", id),
            content: "Once upon a time.\n\nThe end.".to_string(),
            is_favorite: false,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the story entity into the database.
    pub async fn build(self) -> Result<entity::story::Model, DbErr> {
        entity::story::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            is_favorite: ActiveValue::Set(self.is_favorite),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a story with default values for the given user.
pub async fn create_story(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::story::Model, DbErr> {
    StoryFactory::new(db, user_id).build().await
}

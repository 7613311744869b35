//! Story service: validation and tag normalization around the story repository.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::story::StoryRepository,
    error::AppError,
    model::story::{CreateStoryParam, ListStoriesParam, SetFavoriteParam, Story},
    util::validation::{normalize_tags, validate_content, validate_title},
};

pub struct StoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and saves a story.
    ///
    /// Title is trimmed, tags are trimmed and deduplicated before saving.
    ///
    /// # Returns
    /// - `Ok(Story)` - Saved story with its tags
    /// - `Err(AppError::BadRequest)` - Missing title or content, or an overlong field
    pub async fn create(&self, param: CreateStoryParam) -> Result<Story, AppError> {
        let title = validate_title(&param.title)?;
        validate_content(&param.content)?;
        let tags = normalize_tags(param.tags)?;

        let story = StoryRepository::new(self.db)
            .create(CreateStoryParam {
                user_id: param.user_id,
                title,
                content: param.content,
                tags,
            })
            .await?;

        Ok(story)
    }

    pub async fn list(&self, param: ListStoriesParam) -> Result<Vec<Story>, AppError> {
        let stories = StoryRepository::new(self.db).get_by_user(param).await?;
        Ok(stories)
    }

    /// Deletes one of the user's stories.
    ///
    /// # Returns
    /// - `Ok(())` - Story deleted
    /// - `Err(AppError::NotFound)` - No such story owned by the user
    pub async fn delete(&self, user_id: i32, story_id: i32) -> Result<(), AppError> {
        if !StoryRepository::new(self.db).delete(user_id, story_id).await? {
            return Err(AppError::NotFound("Story not found.".to_string()));
        }

        Ok(())
    }

    /// Sets the favorite flag, or flips it when no value is given.
    ///
    /// # Returns
    /// - `Ok(bool)` - The stored favorite state
    /// - `Err(AppError::NotFound)` - No such story owned by the user
    pub async fn set_favorite(&self, param: SetFavoriteParam) -> Result<bool, AppError> {
        let repo = StoryRepository::new(self.db);

        let stored = match param.is_favorite {
            Some(value) => repo
                .set_favorite(param.user_id, param.story_id, value)
                .await?
                .then_some(value),
            None => repo.toggle_favorite(param.user_id, param.story_id).await?,
        };

        stored.ok_or_else(|| AppError::NotFound("Story not found.".to_string()))
    }
}

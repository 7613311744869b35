//! Story domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::story::{StoryDto, StorySortDto};

/// Saved story with the names of its tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    /// Tag names sorted alphabetically.
    pub tags: Vec<String>,
}

impl Story {
    pub fn into_dto(self) -> StoryDto {
        StoryDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            content: self.content,
            is_favorite: self.is_favorite,
            created_at: self.created_at,
            tags: self.tags,
        }
    }

    pub fn from_entity(entity: entity::story::Model, tags: Vec<String>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            content: entity.content,
            is_favorite: entity.is_favorite,
            created_at: entity.created_at,
            tags,
        }
    }
}

/// Ordering of a story listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorySort {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
}

impl From<StorySortDto> for StorySort {
    fn from(dto: StorySortDto) -> Self {
        match dto {
            StorySortDto::Newest => Self::Newest,
            StorySortDto::Oldest => Self::Oldest,
            StorySortDto::Alphabetical => Self::Alphabetical,
        }
    }
}

/// Parameters for saving a story. Tags are already normalized.
#[derive(Debug, Clone)]
pub struct CreateStoryParam {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Parameters for listing a user's stories.
#[derive(Debug, Clone, Default)]
pub struct ListStoriesParam {
    pub user_id: i32,
    /// Case-insensitive substring of title or content.
    pub search: Option<String>,
    /// Exact tag name.
    pub tag: Option<String>,
    pub sort: StorySort,
}

/// Parameters for setting or toggling a story's favorite flag.
#[derive(Debug, Clone)]
pub struct SetFavoriteParam {
    pub user_id: i32,
    pub story_id: i32,
    /// `None` flips the current state.
    pub is_favorite: Option<bool>,
}

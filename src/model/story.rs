use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateStoryDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Saved story together with its tag names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct StoryDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateStoryResponseDto {
    pub message: String,
    pub story: StoryDto,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDto {
    /// Desired state; the current state is flipped when omitted.
    #[serde(default)]
    pub is_favorite: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResponseDto {
    pub message: String,
    pub is_favorite: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StorySortDto {
    #[default]
    Newest,
    Oldest,
    Alphabetical,
}

/// Optional filters for listing saved stories.
#[derive(Serialize, Deserialize, Clone, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StoryQueryDto {
    /// Case-insensitive match against title and content.
    pub search: Option<String>,
    /// Only stories carrying this tag.
    pub tag: Option<String>,
    pub sort: Option<StorySortDto>,
}

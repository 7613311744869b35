use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Story parameters the server turns into a prompt.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoryOptionsDto {
    pub genre: String,
    pub character_name: String,
    pub role: String,
    pub setting: String,
    pub tone: String,
    #[serde(default)]
    pub plot_twist: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum GenerateRequestDto {
    Prompt { prompt: String },
    Options(StoryOptionsDto),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GeneratedStoryDto {
    pub title: String,
    pub paragraphs: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponseDto {
    /// Provider output exactly as received.
    pub generated_text: String,
    pub story: GeneratedStoryDto,
}

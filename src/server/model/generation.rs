//! Story generation domain models: prompt building and provider output parsing.

use serde::{Deserialize, Serialize};

use crate::{
    model::generation::{GeneratedStoryDto, GenerateResponseDto, StoryOptionsDto},
    server::{
        error::{generation::GenerationError, AppError},
        util::validation::{require, validate_character_name},
    },
};

const PLOT_TWIST_TEXT: &str = "Add an unexpected plot twist.";
const RESPONSE_FORMAT_TEXT: &str = "Can you please return the story in this json format please: { \"title\": (string, title of the story), \"paragraphs\": (array of strings for each paragraph of the story) }";

/// Validated story parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryOptions {
    pub genre: String,
    pub character_name: String,
    pub role: String,
    pub setting: String,
    pub tone: String,
    pub plot_twist: bool,
}

impl StoryOptions {
    pub fn from_dto(dto: StoryOptionsDto) -> Result<Self, AppError> {
        Ok(Self {
            genre: require(&dto.genre, "Genre")?,
            character_name: validate_character_name(&dto.character_name)?,
            role: require(&dto.role, "Role")?,
            setting: require(&dto.setting, "Setting")?,
            tone: require(&dto.tone, "Tone")?,
            plot_twist: dto.plot_twist,
        })
    }

    /// Renders the prompt sent to the provider.
    pub fn to_prompt(&self) -> String {
        let mut prompt = format!(
            "Write a {} {} story set in a {}. The main character is {}, who plays the role of a {}.",
            self.tone.to_lowercase(),
            self.genre.to_lowercase(),
            self.setting.to_lowercase(),
            self.character_name,
            self.role.to_lowercase(),
        );
        if self.plot_twist {
            prompt.push(' ');
            prompt.push_str(PLOT_TWIST_TEXT);
        }
        prompt.push('\n');
        prompt.push_str(RESPONSE_FORMAT_TEXT);

        prompt
    }
}

/// Story shape the provider is asked to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl StoryDraft {
    /// Parses the outermost JSON object in `text`, ignoring surrounding prose or code fences.
    ///
    /// # Returns
    /// - `Ok(StoryDraft)` - A titled story with at least one non-blank paragraph
    /// - `Err(GenerationError::InvalidStory)` - No object, wrong shape, or empty story
    pub fn parse(text: &str) -> Result<Self, GenerationError> {
        let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
            return Err(GenerationError::InvalidStory(
                "no JSON object in generated text".to_string(),
            ));
        };
        if end < start {
            return Err(GenerationError::InvalidStory(
                "no JSON object in generated text".to_string(),
            ));
        }

        let draft: StoryDraft = serde_json::from_str(&text[start..=end])
            .map_err(|e| GenerationError::InvalidStory(e.to_string()))?;

        if draft.title.trim().is_empty() {
            return Err(GenerationError::InvalidStory("story has no title".to_string()));
        }
        if draft.paragraphs.iter().all(|p| p.trim().is_empty()) {
            return Err(GenerationError::InvalidStory(
                "story has no paragraphs".to_string(),
            ));
        }

        Ok(draft)
    }
}

/// Provider output: the verbatim text and the story parsed from it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedStory {
    pub text: String,
    pub story: StoryDraft,
}

impl GeneratedStory {
    pub fn into_dto(self) -> GenerateResponseDto {
        GenerateResponseDto {
            generated_text: self.text,
            story: GeneratedStoryDto {
                title: self.story.title,
                paragraphs: self.story.paragraphs,
            },
        }
    }
}

/// Pulls the generated text out of a provider response body.
///
/// Accepts `generated_text`, `generatedText` or a `[{"generated_text": ...}]` array.
pub fn extract_generated_text(body: &serde_json::Value) -> Option<String> {
    let text = body
        .get("generated_text")
        .or_else(|| body.get("generatedText"))
        .or_else(|| body.get(0).and_then(|first| first.get("generated_text")))?;

    text.as_str().map(str::to_string)
}

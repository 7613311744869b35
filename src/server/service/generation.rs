//! Client for the external text-generation provider.

use serde::Serialize;

use crate::server::{
    error::{generation::GenerationError, AppError},
    model::generation::{extract_generated_text, GeneratedStory, StoryDraft},
    state::ProviderConfig,
};

#[derive(Serialize)]
struct ProviderRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    prompt: &'a str,
}

pub struct StoryGenerationService<'a> {
    http_client: &'a reqwest::Client,
    provider: &'a ProviderConfig,
}

impl<'a> StoryGenerationService<'a> {
    pub fn new(http_client: &'a reqwest::Client, provider: &'a ProviderConfig) -> Self {
        Self {
            http_client,
            provider,
        }
    }

    /// Sends a prompt to the provider and parses the story out of its answer.
    ///
    /// # Returns
    /// - `Ok(GeneratedStory)` - Verbatim provider text and the parsed story
    /// - `Err(AppError::GenerationErr)` - Transport failure, non-2xx status, missing
    ///   text field, or text that is not a story
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedStory, AppError> {
        let mut request = self
            .http_client
            .post(self.provider.url.clone())
            .json(&ProviderRequest {
                model: self.provider.model.as_deref(),
                prompt,
            });
        if let Some(api_key) = &self.provider.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(GenerationError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::UpstreamStatus {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let body: serde_json::Value = response.json().await.map_err(GenerationError::from)?;
        let text = extract_generated_text(&body).ok_or(GenerationError::MissingText)?;
        let story = StoryDraft::parse(&text)?;

        Ok(GeneratedStory { text, story })
    }
}

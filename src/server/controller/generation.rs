use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        generation::{GenerateRequestDto, GenerateResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::generation::StoryOptions,
        service::generation::StoryGenerationService,
        state::AppState,
        util::{extract::JsonBody, validation::require},
    },
};

/// Tag for grouping generation endpoints in OpenAPI documentation
pub static GENERATION_TAG: &str = "generation";

/// Generate a story with the external text-generation provider.
///
/// Accepts either a raw prompt, relayed unchanged, or story options from which the
/// prompt is built. The route's quota layer reserves one API call before this runs
/// and refunds it unless a story is returned.
///
/// # Returns
/// - `200 OK` - Provider text verbatim plus the parsed story
/// - `400 Bad Request` - Empty prompt or invalid story options
/// - `403 Forbidden` - No API calls remaining
/// - `502 Bad Gateway` - Provider failed or returned something that is not a story
#[utoipa::path(
    post,
    path = "/api/v1/generate",
    tag = GENERATION_TAG,
    request_body = GenerateRequestDto,
    responses(
        (status = 200, description = "Story generated", body = GenerateResponseDto),
        (status = 400, description = "Invalid prompt or story options", body = ErrorDto),
        (status = 401, description = "Missing or invalid session", body = ErrorDto),
        (status = 403, description = "No API calls remaining", body = ErrorDto),
        (status = 502, description = "Provider failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(payload): JsonBody<GenerateRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let prompt = match payload {
        GenerateRequestDto::Prompt { prompt } => {
            require(&prompt, "Prompt")?;
            prompt
        }
        GenerateRequestDto::Options(options) => StoryOptions::from_dto(options)?.to_prompt(),
    };

    let generated = StoryGenerationService::new(&state.http_client, &state.provider)
        .generate(&prompt)
        .await?;

    tracing::debug!("Generated story \"{}\" for user {}", generated.story.title, user.id);

    Ok((StatusCode::OK, Json(generated.into_dto())))
}

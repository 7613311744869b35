use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        story::{
            CreateStoryDto, CreateStoryResponseDto, FavoriteDto, FavoriteResponseDto, StoryDto,
            StoryQueryDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::story::{CreateStoryParam, ListStoriesParam, SetFavoriteParam},
        service::story::StoryService,
        state::AppState,
        util::extract::{JsonBody, PathId},
    },
};

/// Tag for grouping story endpoints in OpenAPI documentation
pub static STORY_TAG: &str = "story";

/// Save a story with optional tags.
///
/// # Returns
/// - `201 Created` - Saved story with its normalized tags
/// - `400 Bad Request` - Missing title or content, or an overlong field
#[utoipa::path(
    post,
    path = "/api/v1/createStory",
    tag = STORY_TAG,
    request_body = CreateStoryDto,
    responses(
        (status = 201, description = "Story saved", body = CreateStoryResponseDto),
        (status = 400, description = "Invalid story data", body = ErrorDto),
        (status = 401, description = "Missing or invalid session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_story(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(payload): JsonBody<CreateStoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let story = StoryService::new(&state.db)
        .create(CreateStoryParam {
            user_id: user.id,
            title: payload.title,
            content: payload.content,
            tags: payload.tags,
        })
        .await?;

    let tags = story.tags.clone();

    Ok((
        StatusCode::CREATED,
        Json(CreateStoryResponseDto {
            message: "Story saved successfully.".to_string(),
            story: story.into_dto(),
            tags,
        }),
    ))
}

/// Delete one of the signed-in user's stories.
#[utoipa::path(
    delete,
    path = "/api/v1/deleteStory/{id}",
    tag = STORY_TAG,
    params(
        ("id" = i32, Path, description = "Story ID")
    ),
    responses(
        (status = 200, description = "Story deleted", body = MessageDto),
        (status = 400, description = "Story not found", body = ErrorDto),
        (status = 401, description = "Missing or invalid session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_story(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    PathId(story_id): PathId,
) -> Result<impl IntoResponse, AppError> {
    StoryService::new(&state.db).delete(user.id, story_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Story deleted successfully.")),
    ))
}

/// List the signed-in user's stories with their tags.
///
/// Newest first unless another `sort` is given.
#[utoipa::path(
    get,
    path = "/api/v1/getStories",
    tag = STORY_TAG,
    params(StoryQueryDto),
    responses(
        (status = 200, description = "Stories with tags", body = Vec<StoryDto>),
        (status = 401, description = "Missing or invalid session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stories(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<StoryQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let stories = StoryService::new(&state.db)
        .list(ListStoriesParam {
            user_id: user.id,
            search: query.search,
            tag: query.tag,
            sort: query.sort.map(Into::into).unwrap_or_default(),
        })
        .await?;

    let stories: Vec<StoryDto> = stories.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(stories)))
}

/// Set or toggle a story's favorite flag.
///
/// An omitted `isFavorite` flips the current state.
#[utoipa::path(
    put,
    path = "/api/v1/favorite/{id}",
    tag = STORY_TAG,
    params(
        ("id" = i32, Path, description = "Story ID")
    ),
    request_body = FavoriteDto,
    responses(
        (status = 200, description = "Favorite state stored", body = FavoriteResponseDto),
        (status = 400, description = "Story not found", body = ErrorDto),
        (status = 401, description = "Missing or invalid session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_favorite(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    PathId(story_id): PathId,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: FavoriteDto = if body.is_empty() {
        FavoriteDto::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(e.to_string()))?
    };

    let is_favorite = StoryService::new(&state.db)
        .set_favorite(SetFavoriteParam {
            user_id: user.id,
            story_id,
            is_favorite: payload.is_favorite,
        })
        .await?;

    let message = if is_favorite {
        "Story added to favorites."
    } else {
        "Story removed from favorites."
    };

    Ok((
        StatusCode::OK,
        Json(FavoriteResponseDto {
            message: message.to_string(),
            is_favorite,
        }),
    ))
}

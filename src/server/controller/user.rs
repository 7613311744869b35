use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{ApiCallsDto, CurrentUserDto, UpdateUsernameDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::user::UpdateUsernameParam,
        service::{auth::AuthService, user::UserService},
        state::AppState,
        util::{
            cookie::session_cookie,
            extract::{JsonBody, PathId},
        },
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the signed-in user from the session token.
#[utoipa::path(
    get,
    path = "/api/v1/checkUser",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Signed-in user", body = CurrentUserDto),
        (status = 401, description = "Missing or invalid session", body = ErrorDto)
    ),
)]
pub async fn check_user(AuthUser(user): AuthUser) -> impl IntoResponse {
    (StatusCode::OK, Json(user.into_dto()))
}

/// Change the signed-in user's username.
///
/// Only the account owner may rename it. The session cookie is re-issued so its
/// claims carry the new name.
///
/// # Returns
/// - `200 OK` - Username updated
/// - `400 Bad Request` - Blank username or user not found
/// - `401 Unauthorized` - Renaming someone else's account
#[utoipa::path(
    put,
    path = "/api/v1/update/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUsernameDto,
    responses(
        (status = 200, description = "Username updated", body = MessageDto),
        (status = 400, description = "Invalid username or user not found", body = ErrorDto),
        (status = 401, description = "Not allowed to rename this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_username(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    jar: CookieJar,
    PathId(user_id): PathId,
    JsonBody(payload): JsonBody<UpdateUsernameDto>,
) -> Result<impl IntoResponse, AppError> {
    let updated = UserService::new(&state.db)
        .update_username(UpdateUsernameParam {
            requester_id: user.id,
            user_id,
            username: payload.username,
        })
        .await?;

    let token = AuthService::new(&state.db, &state.tokens).issue_token(&updated)?;

    Ok((
        StatusCode::OK,
        jar.add(session_cookie(token)),
        Json(MessageDto::new("Username updated successfully.")),
    ))
}

/// Get the signed-in user's remaining generation calls.
#[utoipa::path(
    get,
    path = "/api/v1/getApiCalls",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Remaining API calls", body = ApiCallsDto),
        (status = 401, description = "Missing or invalid session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_api_calls(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let api_calls = UserService::new(&state.db).get_api_calls(user.id).await?;

    Ok((StatusCode::OK, Json(ApiCallsDto { api_calls })))
}

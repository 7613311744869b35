use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        resource::ResourcesDto,
        user::AdminDataDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser, Permission},
        model::user::DeleteUserParam,
        service::{usage::UsageService, user::UserService},
        state::AppState,
        util::extract::PathId,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get every user with their remaining API calls.
///
/// Any signed-in user may call this; non-admins receive `isAdmin: false` and an
/// empty user list so the dashboard can decide what to render.
#[utoipa::path(
    get,
    path = "/api/v1/admin/data",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Admin flag and user list", body = AdminDataDto),
        (status = 401, description = "Missing or invalid session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_data(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &user).require(&[]).await?;

    if !user.is_admin {
        return Ok((
            StatusCode::OK,
            Json(AdminDataDto {
                is_admin: false,
                users: Vec::new(),
            }),
        ));
    }

    let users = UserService::new(&state.db).get_all_with_usage().await?;

    Ok((
        StatusCode::OK,
        Json(AdminDataDto {
            is_admin: true,
            users: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}

/// Get request counters for every endpoint and method.
#[utoipa::path(
    get,
    path = "/api/v1/admin/resource",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Endpoint request counters", body = ResourcesDto),
        (status = 401, description = "Missing session or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_resource(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &user)
        .require(&[Permission::Admin])
        .await?;

    let resources = UsageService::new(&state.db).get_resources().await?;

    Ok((
        StatusCode::OK,
        Json(ResourcesDto {
            resources: resources.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

/// Delete a user together with their stories and usage record.
///
/// # Returns
/// - `200 OK` - User deleted
/// - `400 Bad Request` - User not found, or the admin targeted their own account
/// - `401 Unauthorized` - Caller is not an admin
#[utoipa::path(
    delete,
    path = "/api/v1/admin/delete/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 400, description = "User not found or self-deletion", body = ErrorDto),
        (status = 401, description = "Missing session or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    PathId(user_id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &user)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db)
        .delete_user(DeleteUserParam {
            requester_id: admin.id,
            user_id,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User deleted successfully.")),
    ))
}

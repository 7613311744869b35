use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, LoginResponseDto, RegisterDto},
    },
    server::{
        error::AppError,
        model::user::{LoginParam, RegisterUserParam},
        service::auth::AuthService,
        state::AppState,
        util::{
            cookie::{removal_cookie, session_cookie},
            extract::JsonBody,
        },
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user with the default generation allowance.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Invalid field or email already registered
#[utoipa::path(
    post,
    path = "/api/v1/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = MessageDto),
        (status = 400, description = "Invalid registration data or email in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    service
        .register(RegisterUserParam {
            username: payload.username,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("User registered successfully.")),
    ))
}

/// Log in with email and password.
///
/// Sets the `authToken` session cookie on success.
///
/// # Returns
/// - `200 OK` - Logged in; body says whether the user is an admin
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = LoginResponseDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let (user, token) = service
        .login(LoginParam {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok((
        StatusCode::OK,
        jar.add(session_cookie(token)),
        Json(LoginResponseDto {
            message: "Login successful.".to_string(),
            is_admin: user.is_admin,
        }),
    ))
}

/// Log out by clearing the session cookie.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageDto)
    ),
)]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (
        StatusCode::OK,
        jar.add(removal_cookie()),
        Json(MessageDto::new("Logged out successfully.")),
    )
}

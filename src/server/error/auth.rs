use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `authToken` cookie.
    #[error("Request has no session cookie")]
    MissingToken,

    /// Session token failed signature or expiry validation.
    #[error("Session token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Unknown email or wrong password during login.
    #[error("Invalid login attempt for email {0}")]
    InvalidCredentials(String),

    /// Token refers to a user that no longer exists.
    #[error("User {0} from session token not found in database")]
    UserNotInDatabase(i32),

    /// User lacks a permission the route requires.
    ///
    /// # Fields
    /// - ID of the user
    /// - Description of what was attempted
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// User has no generation calls remaining.
    #[error("User {0} has no API calls remaining")]
    QuotaExhausted(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level; client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - For missing/invalid sessions, bad credentials and denied access
/// - 403 Forbidden - For an exhausted generation quota
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized access.")
            }
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid or expired token."),
            Self::InvalidCredentials(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid email or password.")
            }
            Self::AccessDenied(_, _) => (StatusCode::UNAUTHORIZED, "Access denied."),
            Self::QuotaExhausted(_) => (
                StatusCode::FORBIDDEN,
                "You have used all of your API calls.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

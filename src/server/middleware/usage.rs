//! Usage metering applied to authenticated routes.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthUser,
    service::usage::UsageService,
    state::AppState,
};

/// Counts the request against its route template and method.
///
/// Uses the matched template (e.g. `/api/v1/deleteStory/{id}`) so every ID shares one
/// counter. Failures are logged and never affect the response.
pub async fn track_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let method = request.method().to_string();

    if let Err(e) = UsageService::new(&state.db)
        .record_request(&endpoint, &method)
        .await
    {
        tracing::warn!("Failed to record request to {} {}: {}", method, endpoint, e);
    }

    next.run(request).await
}

/// Reserves one generation call around the wrapped handler.
///
/// Requests are rejected with 403 before the handler runs when no calls remain. The
/// reservation is refunded unless the handler answers with a 2xx status; refund
/// failures are logged and never affect the response.
pub async fn reserve_api_call(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(AuthUser(user)) = request.extensions().get::<AuthUser>().cloned() else {
        return Err(AuthError::MissingToken.into());
    };

    let usage = UsageService::new(&state.db);
    let remaining = usage.reserve_api_call(user.id).await?;
    tracing::debug!("User {} has {} API calls remaining", user.id, remaining);

    let response = next.run(request).await;

    if !response.status().is_success() {
        if let Err(e) = usage.refund_api_call(user.id).await {
            tracing::warn!("Failed to refund API call for user {}: {}", user.id, e);
        }
    }

    Ok(response)
}

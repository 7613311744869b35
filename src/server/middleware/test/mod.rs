use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::factory;
use tower::ServiceExt;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{require_auth, AuthGuard, AuthUser, Permission},
        usage::{reserve_api_call, track_request},
    },
    model::user::User,
    state::AppState,
    testing::{test_state, unreachable_provider},
    util::cookie::AUTH_COOKIE,
};

mod auth;
mod usage;

fn cookie_header(token: &str) -> String {
    format!("{}={}", AUTH_COOKIE, token)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, admin_data, admin_resource, delete_user},
        auth::{self, login, logout, register},
        generation::{self, generate},
        story::{self, create_story, delete_story, get_stories, set_favorite},
        user::{self, check_user, get_api_calls, update_username},
    },
    middleware::{
        auth::require_auth,
        usage::{reserve_api_call, track_request},
    },
    state::AppState,
};

pub static API_BASE: &str = "/api/v1";

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::logout,
        user::check_user,
        user::update_username,
        user::get_api_calls,
        story::create_story,
        story::delete_story,
        story::get_stories,
        story::set_favorite,
        generation::generate,
        admin::admin_data,
        admin::admin_resource,
        admin::delete_user,
    ),
    tags(
        (name = "auth", description = "Registration and cookie sessions"),
        (name = "user", description = "Signed-in user account"),
        (name = "story", description = "Saved stories and tags"),
        (name = "generation", description = "Story generation through the external provider"),
        (name = "admin", description = "User management and endpoint statistics"),
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Protected routes are layered so authentication runs first, then request metering,
/// then (for `/generate` only) the quota reservation. Requests rejected by
/// authentication never reach the counters.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout));

    let generation = Router::new()
        .route("/generate", post(generate))
        .route_layer(from_fn_with_state(state.clone(), reserve_api_call));

    let protected = Router::new()
        .route("/checkUser", get(check_user))
        .route("/update/{id}", put(update_username))
        .route("/getApiCalls", get(get_api_calls))
        .route("/createStory", post(create_story))
        .route("/deleteStory/{id}", delete(delete_story))
        .route("/getStories", get(get_stories))
        .route("/favorite/{id}", put(set_favorite))
        .route("/admin/data", get(admin_data))
        .route("/admin/resource", get(admin_resource))
        .route("/admin/delete/{id}", delete(delete_user))
        .merge(generation)
        .route_layer(from_fn_with_state(state.clone(), track_request))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let api = Router::new().merge(public).merge(protected).with_state(state);

    Router::new()
        .nest(API_BASE, api)
        .merge(
            SwaggerUi::new(format!("{}/doc", API_BASE))
                .url(format!("{}/openapi.json", API_BASE), ApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
}

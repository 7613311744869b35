use super::*;

mod guard;
mod require_auth;

/// Protected router echoing the signed-in username.
fn protected_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/items/{id}",
            get(|AuthUser(user): AuthUser| async move { user.username }),
        )
        .route_layer(from_fn_with_state(state.clone(), track_request))
        .route_layer(from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
}

use super::*;

/// Router whose handler answers with the status given in the path.
fn quota_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/spend/{status}",
            get(|axum::extract::Path(status): axum::extract::Path<u16>| async move {
                StatusCode::from_u16(status).unwrap()
            }),
        )
        .route_layer(from_fn_with_state(state.clone(), reserve_api_call))
        .route_layer(from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
}

async fn spend(state: &AppState, token: &str, status: u16) -> StatusCode {
    quota_app(state.clone())
        .oneshot(
            Request::get(format!("/spend/{}", status))
                .header(header::COOKIE, cookie_header(token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
}

async fn remaining(state: &AppState) -> i32 {
    entity::prelude::ApiUsage::find().all(&state.db).await.unwrap()[0].api_calls
}

/// Tests that only successful responses keep their reservation.
///
/// Expected: 2xx spends a call, 4xx and 5xx are refunded
#[tokio::test]
async fn spends_only_after_success() -> Result<(), AppError> {
    let (_test, state) = test_state(unreachable_provider().await).await;
    let user = factory::create_user(&state.db).await?;
    factory::create_api_usage(&state.db, user.id, 2).await?;
    let token = state.tokens.issue(&User::from_entity(user.clone()))?;

    assert_eq!(spend(&state, &token, 400).await, StatusCode::BAD_REQUEST);
    assert_eq!(spend(&state, &token, 502).await, StatusCode::BAD_GATEWAY);
    assert_eq!(remaining(&state).await, 2);

    assert_eq!(spend(&state, &token, 200).await, StatusCode::OK);
    assert_eq!(remaining(&state).await, 1);

    Ok(())
}

/// Tests requests after the allowance is used up.
///
/// Expected: 403 without running the handler, counter stays at 0
#[tokio::test]
async fn rejects_when_exhausted() -> Result<(), AppError> {
    let (_test, state) = test_state(unreachable_provider().await).await;
    let user = factory::create_user(&state.db).await?;
    factory::create_api_usage(&state.db, user.id, 1).await?;
    let token = state.tokens.issue(&User::from_entity(user.clone()))?;

    assert_eq!(spend(&state, &token, 200).await, StatusCode::OK);
    assert_eq!(spend(&state, &token, 200).await, StatusCode::FORBIDDEN);
    assert_eq!(spend(&state, &token, 200).await, StatusCode::FORBIDDEN);
    assert_eq!(remaining(&state).await, 0);

    Ok(())
}

/// Tests a user without a usage row.
///
/// Expected: the row is created with the default allowance minus the spent call
#[tokio::test]
async fn creates_missing_row() -> Result<(), AppError> {
    let (_test, state) = test_state(unreachable_provider().await).await;
    let user = factory::create_user(&state.db).await?;
    let token = state.tokens.issue(&User::from_entity(user))?;

    assert_eq!(spend(&state, &token, 204).await, StatusCode::NO_CONTENT);

    let usage = entity::prelude::ApiUsage::find().all(&state.db).await?;
    assert_eq!(usage.len(), 1);
    assert_eq!(usage[0].api_calls, 19);

    Ok(())
}

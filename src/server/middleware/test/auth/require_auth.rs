use super::*;
use crate::server::{testing::TEST_JWT_SECRET, util::token::SessionTokens};

/// Tests a request without a session cookie.
///
/// Expected: 401 with a message body and no resource counter written
#[tokio::test]
async fn rejects_missing_cookie_without_side_effects() -> Result<(), AppError> {
    let (_test, state) = test_state(unreachable_provider().await).await;
    let db = state.db.clone();

    let response = protected_app(state)
        .oneshot(Request::get("/items/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_string(response).await.contains("\"message\""));
    assert_eq!(entity::prelude::Resource::find().count(&db).await?, 0);

    Ok(())
}

/// Tests tokens signed with another secret and expired tokens.
///
/// Expected: 401 for both
#[tokio::test]
async fn rejects_forged_and_expired_tokens() -> Result<(), AppError> {
    let (_test, state) = test_state(unreachable_provider().await).await;
    let user = User::from_entity(factory::create_user(&state.db).await?);

    let forged = SessionTokens::new("other-secret").issue(&user)?;
    let expired = SessionTokens::with_ttl(TEST_JWT_SECRET, chrono::Duration::hours(-2)).issue(&user)?;

    for token in [forged, expired, "garbage".to_string()] {
        let response = protected_app(state.clone())
            .oneshot(
                Request::get("/items/1")
                    .header(header::COOKIE, cookie_header(&token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
    assert_eq!(entity::prelude::Resource::find().count(&state.db).await?, 0);

    Ok(())
}

/// Tests a request with a valid session cookie.
///
/// Expected: 200, the handler sees the user, and the route template is counted
#[tokio::test]
async fn attaches_user_and_meters_route_template() -> Result<(), AppError> {
    let (_test, state) = test_state(unreachable_provider().await).await;
    let user = factory::user::UserFactory::new(&state.db)
        .username("ada")
        .build()
        .await?;
    let token = state.tokens.issue(&User::from_entity(user))?;

    for id in [1, 2] {
        let response = protected_app(state.clone())
            .oneshot(
                Request::get(format!("/items/{}", id))
                    .header(header::COOKIE, cookie_header(&token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ada");
    }

    let resources = entity::prelude::Resource::find().all(&state.db).await?;
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].endpoint, "/items/{id}");
    assert_eq!(resources[0].method, "GET");
    assert_eq!(resources[0].requests, 2);

    Ok(())
}

/// Tests that the extractor rejects requests the middleware never saw.
///
/// Expected: 401
#[tokio::test]
async fn extractor_without_middleware_is_unauthorized() {
    let app: Router = Router::new().route(
        "/",
        get(|AuthUser(user): AuthUser| async move { user.username }),
    );

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

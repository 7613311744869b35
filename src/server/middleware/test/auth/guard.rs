use super::*;

/// Tests an admin passing the admin permission check.
///
/// Expected: Ok(User) with is_admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let (_test, state) = test_state(unreachable_provider().await).await;
    let admin = User::from_entity(factory::user::create_admin(&state.db).await?);

    let user = AuthGuard::new(&state.db, &admin)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert!(user.is_admin);

    Ok(())
}

/// Tests a regular user failing the admin permission check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let (_test, state) = test_state(unreachable_provider().await).await;
    let user = User::from_entity(factory::create_user(&state.db).await?);

    let result = AuthGuard::new(&state.db, &user)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that stale admin claims are not trusted.
///
/// Expected: Err(AuthError::AccessDenied) although the in-memory user claims admin
#[tokio::test]
async fn rechecks_admin_flag_in_database() -> Result<(), AppError> {
    let (_test, state) = test_state(unreachable_provider().await).await;
    let mut user = User::from_entity(factory::create_user(&state.db).await?);
    user.is_admin = true;

    let result = AuthGuard::new(&state.db, &user)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests a token for an account that was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() {
    let (_test, state) = test_state(unreachable_provider().await).await;
    let ghost = User {
        id: 404,
        username: "ghost".to_string(),
        email: "ghost@example.com".to_string(),
        is_admin: true,
    };

    let result = AuthGuard::new(&state.db, &ghost).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));
}

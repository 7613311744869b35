use super::*;

/// Tests renaming an existing user.
///
/// Expected: Ok(Some) with the new username persisted
#[tokio::test]
async fn renames_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_username(created.id, "renamed".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.email, created.email);
    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored.username, "renamed");

    Ok(())
}

/// Tests renaming a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.update_username(999, "ghost".to_string()).await?.is_none());

    Ok(())
}

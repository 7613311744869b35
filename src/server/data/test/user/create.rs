use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with a non-admin user carrying the given fields
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "ada@example.com");
    assert!(!user.is_admin);

    Ok(())
}

/// Tests that emails are unique.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let param = CreateUserParam {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password_hash: "hash".to_string(),
    };
    repo.create(param.clone()).await?;

    let result = repo.create(param).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);
    assert!(repo.email_exists("ada@example.com").await?);
    assert!(!repo.email_exists("bob@example.com").await?);

    Ok(())
}

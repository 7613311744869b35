use super::*;

/// Tests reading an existing counter.
///
/// Expected: Ok with the stored value and no new row
#[tokio::test]
async fn returns_existing_calls() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_api_usage(db, user.id, 5).await?;

    let repo = ApiUsageRepository::new(db);

    assert_eq!(repo.get_or_create(user.id).await?, 5);
    assert_eq!(entity::prelude::ApiUsage::find().count(db).await?, 1);

    Ok(())
}

/// Tests lazy creation on first read.
///
/// Expected: Ok with the default allowance, created exactly once
#[tokio::test]
async fn creates_missing_row_with_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = ApiUsageRepository::new(db);

    assert_eq!(repo.get_or_create(user.id).await?, DEFAULT_API_CALLS);
    assert_eq!(repo.get_or_create(user.id).await?, DEFAULT_API_CALLS);
    assert_eq!(entity::prelude::ApiUsage::find().count(db).await?, 1);

    Ok(())
}

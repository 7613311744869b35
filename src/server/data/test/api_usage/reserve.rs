use super::*;

/// Tests reserving one call.
///
/// Expected: Ok(Some) with the counter reduced by one
#[tokio::test]
async fn reserves_one_call() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_api_usage(db, user.id, 3).await?;

    let repo = ApiUsageRepository::new(db);

    assert_eq!(repo.reserve(user.id).await?, Some(2));
    assert_eq!(repo.get_or_create(user.id).await?, 2);

    Ok(())
}

/// Tests reserving past the last call.
///
/// Expected: Ok(None) once the counter reaches zero, which it never goes below
#[tokio::test]
async fn refuses_when_exhausted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_api_usage(db, user.id, 1).await?;

    let repo = ApiUsageRepository::new(db);

    assert_eq!(repo.reserve(user.id).await?, Some(0));
    assert_eq!(repo.reserve(user.id).await?, None);
    assert_eq!(repo.reserve(user.id).await?, None);
    assert_eq!(repo.get_or_create(user.id).await?, 0);

    Ok(())
}

/// Tests reserving for a user without a usage row.
///
/// Expected: the row is created with the default allowance, then one call is taken
#[tokio::test]
async fn creates_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = ApiUsageRepository::new(db);

    assert_eq!(repo.reserve(user.id).await?, Some(DEFAULT_API_CALLS - 1));
    assert_eq!(entity::prelude::ApiUsage::find().count(db).await?, 1);

    Ok(())
}

/// Tests that reserving for one user leaves others untouched.
///
/// Expected: only the target counter changes
#[tokio::test]
async fn only_touches_target_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_api_usage(db, user.id, 10).await?;
    factory::create_api_usage(db, other.id, 10).await?;

    let repo = ApiUsageRepository::new(db);
    repo.reserve(user.id).await?;

    assert_eq!(repo.get_or_create(other.id).await?, 10);

    Ok(())
}

/// Tests handing a reserved call back.
///
/// Expected: the counter returns to its value before the reservation
#[tokio::test]
async fn refund_restores_reserved_call() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_api_usage(db, user.id, 1).await?;

    let repo = ApiUsageRepository::new(db);

    assert_eq!(repo.reserve(user.id).await?, Some(0));
    assert_eq!(repo.refund(user.id).await?, 1);
    assert_eq!(repo.reserve(user.id).await?, Some(0));

    Ok(())
}

/// Tests many reservations racing for a small allowance.
///
/// Expected: exactly as many succeed as there were calls
#[tokio::test]
async fn concurrent_reservations_never_overspend() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_api_usage(db, user.id, 2).await?;

    let repo = ApiUsageRepository::new(db);
    let (a, b, c, d) = tokio::join!(
        repo.reserve(user.id),
        repo.reserve(user.id),
        repo.reserve(user.id),
        repo.reserve(user.id),
    );

    let granted = [a?, b?, c?, d?].iter().filter(|r| r.is_some()).count();
    assert_eq!(granted, 2);
    assert_eq!(repo.get_or_create(user.id).await?, 0);

    Ok(())
}

use super::*;

/// Tests deleting a tagged story.
///
/// Expected: Ok(true); story and links removed, tag rows kept
#[tokio::test]
async fn removes_links_but_keeps_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, story, _) = factory::helpers::create_story_with_tags(db, &["a", "b"]).await?;

    let repo = StoryRepository::new(db);
    let deleted = repo.delete(user.id, story.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(user.id, story.id).await?.is_none());
    assert_eq!(entity::prelude::StoryTag::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 2);

    Ok(())
}

/// Tests that users cannot delete each other's stories.
///
/// Expected: Ok(false) and the story still exists
#[tokio::test]
async fn refuses_other_users_story() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, story, _) = factory::helpers::create_story_with_tags(db, &["a"]).await?;
    let intruder = factory::create_user(db).await?;

    let repo = StoryRepository::new(db);

    assert!(!repo.delete(intruder.id, story.id).await?);
    assert!(repo.find_by_id(owner.id, story.id).await?.is_some());
    assert_eq!(entity::prelude::StoryTag::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a story that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_story() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    assert!(!StoryRepository::new(db).delete(user.id, 404).await?);

    Ok(())
}

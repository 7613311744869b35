use super::*;

/// Tests saving a story with tags.
///
/// Expected: Ok with the story, its sorted tags, and one link per tag
#[tokio::test]
async fn creates_story_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = StoryRepository::new(db);
    let story = repo
        .create(story_param(user.id, "The Tower", &["b", "a"]))
        .await?;

    assert_eq!(story.user_id, user.id);
    assert_eq!(story.title, "The Tower");
    assert!(!story.is_favorite);
    assert_eq!(story.tags, vec!["a", "b"]);
    assert_eq!(entity::prelude::StoryTag::find().count(db).await?, 2);

    Ok(())
}

/// Tests that tags shared between stories are created once.
///
/// Expected: Ok with a single row per tag name
#[tokio::test]
async fn reuses_existing_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = StoryRepository::new(db);
    repo.create(story_param(user.id, "First", &["a", "b"])).await?;
    repo.create(story_param(user.id, "Second", &["b", "c"])).await?;

    assert_eq!(entity::prelude::Tag::find().count(db).await?, 3);
    assert_eq!(entity::prelude::StoryTag::find().count(db).await?, 4);

    Ok(())
}

/// Tests saving a story without tags.
///
/// Expected: Ok with an empty tag list and no links
#[tokio::test]
async fn creates_story_without_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let story = StoryRepository::new(db)
        .create(story_param(user.id, "Plain", &[]))
        .await?;

    assert!(story.tags.is_empty());
    assert_eq!(entity::prelude::StoryTag::find().count(db).await?, 0);

    Ok(())
}

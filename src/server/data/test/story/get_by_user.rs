use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::story::StoryFactory;

/// Tests that a fetched story carries exactly the tags it was saved with.
///
/// Expected: Ok with tag set {"a", "b"}
#[tokio::test]
async fn returns_saved_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = StoryRepository::new(db);
    repo.create(story_param(user.id, "Tagged", &["b", "a"])).await?;

    let stories = repo
        .get_by_user(ListStoriesParam {
            user_id: user.id,
            ..Default::default()
        })
        .await?;

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].tags, vec!["a", "b"]);

    Ok(())
}

/// Tests that listings only include the requesting user's stories, newest first.
///
/// Expected: Ok with the owner's stories ordered by creation time descending
#[tokio::test]
async fn lists_own_stories_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let now = Utc::now();
    let old = StoryFactory::new(db, user.id)
        .title("Old")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let new = StoryFactory::new(db, user.id)
        .title("New")
        .created_at(now)
        .build()
        .await?;
    factory::create_story(db, other.id).await?;

    let repo = StoryRepository::new(db);
    let newest = repo
        .get_by_user(ListStoriesParam {
            user_id: user.id,
            ..Default::default()
        })
        .await?;
    let oldest = repo
        .get_by_user(ListStoriesParam {
            user_id: user.id,
            sort: StorySort::Oldest,
            ..Default::default()
        })
        .await?;

    let newest_ids: Vec<i32> = newest.iter().map(|s| s.id).collect();
    let oldest_ids: Vec<i32> = oldest.iter().map(|s| s.id).collect();
    assert_eq!(newest_ids, vec![new.id, old.id]);
    assert_eq!(oldest_ids, vec![old.id, new.id]);

    Ok(())
}

/// Tests alphabetical ordering.
///
/// Expected: Ok with titles in ascending order
#[tokio::test]
async fn sorts_alphabetically() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    for title in ["Charlie", "Alpha", "Bravo"] {
        StoryFactory::new(db, user.id).title(title).build().await?;
    }

    let stories = StoryRepository::new(db)
        .get_by_user(ListStoriesParam {
            user_id: user.id,
            sort: StorySort::Alphabetical,
            ..Default::default()
        })
        .await?;

    let titles: Vec<&str> = stories.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Bravo", "Charlie"]);

    Ok(())
}

/// Tests filtering by search text and by tag.
///
/// Expected: Ok with only matching stories; an unknown tag yields nothing
#[tokio::test]
async fn filters_by_search_and_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = StoryRepository::new(db);
    let dragon = repo
        .create(story_param(user.id, "Dragon Keep", &["fantasy"]))
        .await?;
    let rocket = repo
        .create(story_param(user.id, "Rocket Garden", &["scifi"]))
        .await?;

    let by_search = repo
        .get_by_user(ListStoriesParam {
            user_id: user.id,
            search: Some("dragon".to_string()),
            ..Default::default()
        })
        .await?;
    let by_tag = repo
        .get_by_user(ListStoriesParam {
            user_id: user.id,
            tag: Some("scifi".to_string()),
            ..Default::default()
        })
        .await?;
    let by_unknown_tag = repo
        .get_by_user(ListStoriesParam {
            user_id: user.id,
            tag: Some("horror".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(by_search.len(), 1);
    assert_eq!(by_search[0].id, dragon.id);
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].id, rocket.id);
    assert!(by_unknown_tag.is_empty());

    Ok(())
}

/// Tests searching for characters that are wildcards in SQL `LIKE`.
///
/// Expected: `%` and `_` only match stories containing them literally
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_story_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    StoryFactory::new(db, user.id)
        .title("Plain")
        .content("no symbols here")
        .build()
        .await?;
    StoryFactory::new(db, user.id)
        .title("Discount")
        .content("everything is 50% off")
        .build()
        .await?;
    StoryFactory::new(db, user.id)
        .title("snake_case")
        .content("a variable name")
        .build()
        .await?;

    let repo = StoryRepository::new(db);
    let search = |term: &str| ListStoriesParam {
        user_id: user.id,
        search: Some(term.to_string()),
        ..Default::default()
    };

    let percent = repo.get_by_user(search("%")).await?;
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "Discount");

    let underscore = repo.get_by_user(search("_")).await?;
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].title, "snake_case");

    assert!(repo.get_by_user(search("\\")).await?.is_empty());
    assert_eq!(repo.get_by_user(search("SYMBOLS")).await?.len(), 1);

    Ok(())
}

//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user owning one story linked to the given tag names.
///
/// Creates:
/// 1. User
/// 2. Story owned by the user
/// 3. One Tag per name, each linked to the story
///
/// # Arguments
/// - `db` - Database connection
/// - `tags` - Tag names to create and link
///
/// # Returns
/// - `Ok((user, story, tags))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_story_with_tags(
    db: &DatabaseConnection,
    tags: &[&str],
) -> Result<
    (
        entity::user::Model,
        entity::story::Model,
        Vec<entity::tag::Model>,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let story = crate::factory::story::create_story(db, user.id).await?;

    let mut created = Vec::with_capacity(tags.len());
    for name in tags {
        let tag = crate::factory::tag::create_tag(db, *name).await?;
        crate::factory::tag::link_tag(db, story.id, tag.id).await?;
        created.push(tag);
    }

    Ok((user, story, created))
}

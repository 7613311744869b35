//! Story data repository.
//!
//! Stories are always read and written on behalf of their owner: every lookup,
//! update and delete is scoped to a user ID. Tags are fanned out through
//! `TagRepository` inside the same transaction as the story they belong to.

use sea_orm::{
    sea_query::{Expr, ExprTrait, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::tag::TagRepository,
    model::story::{CreateStoryParam, ListStoriesParam, Story, StorySort},
};

const LIKE_ESCAPE: char = '\\';

/// Builds a `LIKE` pattern matching `search` literally anywhere in the column.
fn contains_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub struct StoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves a story and its tags in one transaction.
    ///
    /// Each tag name is upserted so existing tags are reused, then the story-tag
    /// links are bulk inserted.
    ///
    /// # Returns
    /// - `Ok(Story)` - Created story with its sorted tag names
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, param: CreateStoryParam) -> Result<Story, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::story::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            is_favorite: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let tag_repo = TagRepository::new(&txn);
        let mut tag_ids = Vec::with_capacity(param.tags.len());
        for name in &param.tags {
            tag_ids.push(tag_repo.upsert(name).await?);
        }
        tag_repo.link_to_story(entity.id, &tag_ids).await?;

        txn.commit().await?;

        let mut tags = param.tags;
        tags.sort();

        Ok(Story::from_entity(entity, tags))
    }

    /// Finds one of the user's stories.
    pub async fn find_by_id(&self, user_id: i32, story_id: i32) -> Result<Option<Story>, DbErr> {
        let Some(entity) = entity::prelude::Story::find_by_id(story_id)
            .filter(entity::story::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut tags = TagRepository::new(self.db)
            .get_names_by_story_ids(&[entity.id])
            .await?;

        Ok(Some(Story::from_entity(
            entity,
            tags.remove(&story_id).unwrap_or_default(),
        )))
    }

    /// Lists the user's stories with their tags.
    ///
    /// `search` matches title or content case-insensitively, `tag` keeps only stories
    /// carrying that tag. Ties in the requested order fall back to newest ID first.
    pub async fn get_by_user(&self, param: ListStoriesParam) -> Result<Vec<Story>, DbErr> {
        let mut query = entity::prelude::Story::find()
            .filter(entity::story::Column::UserId.eq(param.user_id));

        if let Some(search) = param.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let pattern = contains_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::col(entity::story::Column::Title)
                            .like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)),
                    )
                    .add(
                        Expr::col(entity::story::Column::Content)
                            .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
                    ),
            );
        }

        if let Some(tag) = param.tag.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let Some(tag_id) = TagRepository::new(self.db).find_id_by_name(tag).await? else {
                return Ok(Vec::new());
            };

            let story_ids: Vec<i32> = entity::prelude::StoryTag::find()
                .select_only()
                .column(entity::story_tag::Column::StoryId)
                .filter(entity::story_tag::Column::TagId.eq(tag_id))
                .into_tuple()
                .all(self.db)
                .await?;

            query = query.filter(entity::story::Column::Id.is_in(story_ids));
        }

        query = match param.sort {
            StorySort::Newest => query.order_by_desc(entity::story::Column::CreatedAt),
            StorySort::Oldest => query.order_by_asc(entity::story::Column::CreatedAt),
            StorySort::Alphabetical => query.order_by_asc(entity::story::Column::Title),
        };
        query = match param.sort {
            StorySort::Oldest => query.order_by_asc(entity::story::Column::Id),
            _ => query.order_by_desc(entity::story::Column::Id),
        };

        let entities = query.all(self.db).await?;

        let story_ids: Vec<i32> = entities.iter().map(|story| story.id).collect();
        let mut tags = TagRepository::new(self.db)
            .get_names_by_story_ids(&story_ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|story| {
                let story_tags = tags.remove(&story.id).unwrap_or_default();
                Story::from_entity(story, story_tags)
            })
            .collect())
    }

    /// Deletes one of the user's stories and its tag links. Tags stay in place.
    ///
    /// # Returns
    /// - `Ok(true)` - Story deleted
    /// - `Ok(false)` - No such story owned by the user
    /// - `Err(DbErr)` - Database error; nothing is deleted
    pub async fn delete(&self, user_id: i32, story_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let owned = entity::prelude::Story::find_by_id(story_id)
            .filter(entity::story::Column::UserId.eq(user_id))
            .one(&txn)
            .await?
            .is_some();

        if !owned {
            txn.rollback().await?;
            return Ok(false);
        }

        entity::prelude::StoryTag::delete_many()
            .filter(entity::story_tag::Column::StoryId.eq(story_id))
            .exec(&txn)
            .await?;

        entity::prelude::Story::delete_by_id(story_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }

    /// Sets the favorite flag on one of the user's stories.
    ///
    /// # Returns
    /// - `Ok(true)` - Flag updated
    /// - `Ok(false)` - No such story owned by the user
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_favorite(
        &self,
        user_id: i32,
        story_id: i32,
        is_favorite: bool,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Story::update_many()
            .col_expr(
                entity::story::Column::IsFavorite,
                Expr::value(is_favorite),
            )
            .filter(entity::story::Column::Id.eq(story_id))
            .filter(entity::story::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Flips the favorite flag on one of the user's stories in a single UPDATE.
    ///
    /// # Returns
    /// - `Ok(Some(bool))` - The stored flag after flipping
    /// - `Ok(None)` - No such story owned by the user
    /// - `Err(DbErr)` - Database error; nothing is changed
    pub async fn toggle_favorite(&self, user_id: i32, story_id: i32) -> Result<Option<bool>, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Story::update_many()
            .col_expr(
                entity::story::Column::IsFavorite,
                Expr::col(entity::story::Column::IsFavorite).not(),
            )
            .filter(entity::story::Column::Id.eq(story_id))
            .filter(entity::story::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let is_favorite = entity::prelude::Story::find_by_id(story_id)
            .one(&txn)
            .await?
            .map(|story| story.is_favorite);

        txn.commit().await?;

        Ok(is_favorite)
    }
}

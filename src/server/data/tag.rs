//! Tag data repository.
//!
//! Tag names are globally unique; saving a name that already exists reuses its row.

use std::collections::HashMap;

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a tag or reuses the existing row with the same name.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the tag
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, name: &str) -> Result<i32, DbErr> {
        let entity = entity::prelude::Tag::insert(entity::tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::tag::Column::Name)
                .update_column(entity::tag::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Links tags to a story. Existing links are left untouched.
    pub async fn link_to_story(&self, story_id: i32, tag_ids: &[i32]) -> Result<(), DbErr> {
        if tag_ids.is_empty() {
            return Ok(());
        }

        let links = tag_ids
            .iter()
            .map(|tag_id| entity::story_tag::ActiveModel {
                story_id: ActiveValue::Set(story_id),
                tag_id: ActiveValue::Set(*tag_id),
            });

        entity::prelude::StoryTag::insert_many(links)
            .on_conflict(
                OnConflict::columns([
                    entity::story_tag::Column::StoryId,
                    entity::story_tag::Column::TagId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn find_id_by_name(&self, name: &str) -> Result<Option<i32>, DbErr> {
        entity::prelude::Tag::find()
            .select_only()
            .column(entity::tag::Column::Id)
            .filter(entity::tag::Column::Name.eq(name))
            .into_tuple()
            .one(self.db)
            .await
    }

    /// Gets tag names for each of the given stories, sorted alphabetically.
    ///
    /// Stories without tags are absent from the map.
    pub async fn get_names_by_story_ids(
        &self,
        story_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        if story_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::StoryTag::find()
            .filter(entity::story_tag::Column::StoryId.is_in(story_ids.iter().copied()))
            .find_also_related(entity::prelude::Tag)
            .all(self.db)
            .await?;

        let mut names: HashMap<i32, Vec<String>> = HashMap::new();
        for (link, tag) in rows {
            if let Some(tag) = tag {
                names.entry(link.story_id).or_default().push(tag.name);
            }
        }
        for tags in names.values_mut() {
            tags.sort();
        }

        Ok(names)
    }
}

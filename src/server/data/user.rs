//! User data repository for database operations.
//!
//! Provides `UserRepository` for creating, looking up, renaming and deleting accounts,
//! converting entity models to domain models at the boundary. The repository accepts
//! any connection, so callers can run it inside a transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::api_usage::DEFAULT_API_CALLS,
    model::user::{CreateUserParam, User, UserCredentials, UserWithUsage},
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new non-admin user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            is_admin: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by email, for login.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Renames a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The renamed user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_username(
        &self,
        user_id: i32,
        username: String,
    ) -> Result<Option<User>, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Username,
                sea_orm::sea_query::Expr::value(username),
            )
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(user_id).await
    }

    /// Gets every user with their remaining API calls, ordered by ID.
    ///
    /// Users without a usage row report the default allowance they receive on first use.
    pub async fn get_all_with_usage(&self) -> Result<Vec<UserWithUsage>, DbErr> {
        let rows = entity::prelude::User::find()
            .find_also_related(entity::prelude::ApiUsage)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(user, usage)| UserWithUsage {
                user: User::from_entity(user),
                api_calls: usage.map_or(DEFAULT_API_CALLS, |u| u.api_calls),
            })
            .collect())
    }

    /// Deletes a user together with their usage row, stories and story-tag links.
    ///
    /// Tags stay in place. Callers wanting atomicity pass a transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32) -> Result<bool, DbErr> {
        let story_ids: Vec<i32> = entity::prelude::Story::find()
            .select_only()
            .column(entity::story::Column::Id)
            .filter(entity::story::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        if !story_ids.is_empty() {
            entity::prelude::StoryTag::delete_many()
                .filter(entity::story_tag::Column::StoryId.is_in(story_ids))
                .exec(self.db)
                .await?;
        }

        entity::prelude::Story::delete_many()
            .filter(entity::story::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        entity::prelude::ApiUsage::delete_many()
            .filter(entity::api_usage::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

//! Remaining-call counters for story generation.
//!
//! Each user has at most one row. Rows are created lazily with the full allowance
//! the first time they are read or a call is reserved.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Calls granted to every new account.
pub const DEFAULT_API_CALLS: i32 = 20;

pub struct ApiUsageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApiUsageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the usage row for a user.
    ///
    /// # Returns
    /// - `Ok(i32)` - Stored remaining calls
    /// - `Err(DbErr)` - Database error, including a unique violation if the row exists
    pub async fn create(&self, user_id: i32, api_calls: i32) -> Result<i32, DbErr> {
        entity::prelude::ApiUsage::insert(entity::api_usage::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            api_calls: ActiveValue::Set(api_calls),
            ..Default::default()
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(api_calls)
    }

    /// Gets the remaining calls, creating the row with the default allowance if missing.
    pub async fn get_or_create(&self, user_id: i32) -> Result<i32, DbErr> {
        if let Some(calls) = self.find(user_id).await? {
            return Ok(calls);
        }

        self.insert_default(user_id).await?;

        self.find(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("api_usage for user {}", user_id)))
    }

    /// Takes one call if any remain, creating a missing row with the default allowance.
    ///
    /// The check and the decrement are one conditional UPDATE
    /// (`api_calls = api_calls - 1 WHERE api_calls > 0`); the counter never goes below 0.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - Remaining calls after the reservation
    /// - `Ok(None)` - No calls remain
    /// - `Err(DbErr)` - Database error during update
    pub async fn reserve(&self, user_id: i32) -> Result<Option<i32>, DbErr> {
        self.insert_default(user_id).await?;

        let result = entity::prelude::ApiUsage::update_many()
            .col_expr(
                entity::api_usage::Column::ApiCalls,
                Expr::col(entity::api_usage::Column::ApiCalls).sub(1),
            )
            .filter(entity::api_usage::Column::UserId.eq(user_id))
            .filter(entity::api_usage::Column::ApiCalls.gt(0))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find(user_id).await
    }

    /// Returns a reserved call to the user.
    ///
    /// # Returns
    /// - `Ok(i32)` - Remaining calls after the refund
    /// - `Err(DbErr)` - Database error, or the user has no usage row
    pub async fn refund(&self, user_id: i32) -> Result<i32, DbErr> {
        entity::prelude::ApiUsage::update_many()
            .col_expr(
                entity::api_usage::Column::ApiCalls,
                Expr::col(entity::api_usage::Column::ApiCalls).add(1),
            )
            .filter(entity::api_usage::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        self.find(user_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("api_usage for user {}", user_id)))
    }

    async fn insert_default(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::ApiUsage::insert(entity::api_usage::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            api_calls: ActiveValue::Set(DEFAULT_API_CALLS),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::api_usage::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    async fn find(&self, user_id: i32) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::ApiUsage::find()
            .filter(entity::api_usage::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(|usage| usage.api_calls))
    }
}

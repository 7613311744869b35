//! API usage factory for seeding remaining-call counters.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an API usage row for a user with the given remaining calls.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of an existing user
/// - `api_calls` - Remaining calls to store
///
/// # Returns
/// - `Ok(entity::api_usage::Model)` - Created usage row
/// - `Err(DbErr)` - Database error during insert (e.g. the user already has a row)
pub async fn create_api_usage(
    db: &DatabaseConnection,
    user_id: i32,
    api_calls: i32,
) -> Result<entity::api_usage::Model, DbErr> {
    entity::api_usage::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        api_calls: ActiveValue::Set(api_calls),
        ..Default::default()
    }
    .insert(db)
    .await
}

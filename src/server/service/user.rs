//! User service for account management.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{api_usage::ApiUsageRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{DeleteUserParam, UpdateUsernameParam, User, UserWithUsage},
    util::validation::validate_username,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        Ok(user)
    }

    /// Renames a user. Only the account owner may rename it.
    ///
    /// # Returns
    /// - `Ok(User)` - The renamed user
    /// - `Err(AuthError::AccessDenied)` - Requester is not the account owner
    /// - `Err(AppError::BadRequest)` - Username empty or too long
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn update_username(&self, param: UpdateUsernameParam) -> Result<User, AppError> {
        if param.requester_id != param.user_id {
            return Err(AuthError::AccessDenied(
                param.requester_id,
                format!("attempted to rename user {}", param.user_id),
            )
            .into());
        }

        let username = validate_username(&param.username)?;

        UserRepository::new(self.db)
            .update_username(param.user_id, username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found.".to_string()))
    }

    /// Gets the user's remaining generation calls, creating the counter if missing.
    pub async fn get_api_calls(&self, user_id: i32) -> Result<i32, AppError> {
        let calls = ApiUsageRepository::new(self.db)
            .get_or_create(user_id)
            .await?;
        Ok(calls)
    }

    pub async fn get_all_with_usage(&self) -> Result<Vec<UserWithUsage>, AppError> {
        let users = UserRepository::new(self.db).get_all_with_usage().await?;
        Ok(users)
    }

    /// Deletes an account and everything it owns.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::BadRequest)` - Admin attempted to delete their own account
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete_user(&self, param: DeleteUserParam) -> Result<(), AppError> {
        if param.requester_id == param.user_id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account.".to_string(),
            ));
        }

        let txn = self.db.begin().await?;
        let deleted = UserRepository::new(&txn).delete(param.user_id).await?;
        if !deleted {
            txn.rollback().await?;
            return Err(AppError::NotFound("User not found.".to_string()));
        }
        txn.commit().await?;

        tracing::info!(
            "User {} deleted by admin {}",
            param.user_id,
            param.requester_id
        );

        Ok(())
    }
}

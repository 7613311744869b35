//! Request metering and generation quota.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{api_usage::ApiUsageRepository, resource::ResourceRepository},
    error::{auth::AuthError, AppError},
    model::resource::Resource,
};

pub struct UsageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts one request against a route template and method.
    pub async fn record_request(&self, endpoint: &str, method: &str) -> Result<(), AppError> {
        ResourceRepository::new(self.db)
            .increment(endpoint, method)
            .await?;
        Ok(())
    }

    /// Takes one generation call before the provider is contacted.
    ///
    /// # Returns
    /// - `Ok(i32)` - Calls remaining after the reservation
    /// - `Err(AuthError::QuotaExhausted)` - No calls remain
    pub async fn reserve_api_call(&self, user_id: i32) -> Result<i32, AppError> {
        ApiUsageRepository::new(self.db)
            .reserve(user_id)
            .await?
            .ok_or_else(|| AppError::from(AuthError::QuotaExhausted(user_id)))
    }

    /// Hands back a call reserved for a request that did not produce a story.
    pub async fn refund_api_call(&self, user_id: i32) -> Result<i32, AppError> {
        let remaining = ApiUsageRepository::new(self.db).refund(user_id).await?;
        Ok(remaining)
    }

    pub async fn get_resources(&self) -> Result<Vec<Resource>, AppError> {
        let resources = ResourceRepository::new(self.db).get_all().await?;
        Ok(resources)
    }
}

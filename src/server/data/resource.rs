//! Per-route request counters.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::resource::Resource;

pub struct ResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResourceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds one request to the (endpoint, method) counter, creating it at 1.
    pub async fn increment(&self, endpoint: &str, method: &str) -> Result<(), DbErr> {
        entity::prelude::Resource::insert(entity::resource::ActiveModel {
            endpoint: ActiveValue::Set(endpoint.to_string()),
            method: ActiveValue::Set(method.to_string()),
            requests: ActiveValue::Set(1),
        })
        .on_conflict(
            OnConflict::columns([
                entity::resource::Column::Endpoint,
                entity::resource::Column::Method,
            ])
            .value(
                entity::resource::Column::Requests,
                Expr::col((
                    entity::resource::Entity,
                    entity::resource::Column::Requests,
                ))
                .add(1),
            )
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Gets every counter ordered by endpoint then method.
    pub async fn get_all(&self) -> Result<Vec<Resource>, DbErr> {
        let entities = entity::prelude::Resource::find()
            .order_by_asc(entity::resource::Column::Endpoint)
            .order_by_asc(entity::resource::Column::Method)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Resource::from_entity).collect())
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request count for one route template and HTTP method.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ResourceDto {
    pub endpoint: String,
    pub method: String,
    pub requests: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ResourcesDto {
    pub resources: Vec<ResourceDto>,
}

use crate::model::resource::ResourceDto;

/// Request counter for one route template and HTTP method.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub endpoint: String,
    pub method: String,
    pub requests: i64,
}

impl Resource {
    pub fn into_dto(self) -> ResourceDto {
        ResourceDto {
            endpoint: self.endpoint,
            method: self.method,
            requests: self.requests,
        }
    }

    pub fn from_entity(entity: entity::resource::Model) -> Self {
        Self {
            endpoint: entity.endpoint,
            method: entity.method,
            requests: entity.requests,
        }
    }
}

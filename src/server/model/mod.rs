//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary,
//! and controllers convert them into wire DTOs with `into_dto`.

pub mod generation;
pub mod resource;
pub mod story;
pub mod user;

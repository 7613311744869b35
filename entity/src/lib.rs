//! SeaORM entity models for the story generator schema.
//!
//! Each module maps one table created by the `migration` crate. Relations carry the
//! cascading foreign keys so schemas generated from the entities (as the test utilities
//! do) match the migrated schema.

pub mod prelude;

pub mod api_usage;
pub mod resource;
pub mod story;
pub mod story_tag;
pub mod tag;
pub mod user;

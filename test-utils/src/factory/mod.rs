//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let story = factory::story::create_story(&db, user.id).await?;
//!
//! let (user, story, tags) =
//!     factory::helpers::create_story_with_tags(&db, &["fantasy", "dark"]).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("ada")
//!     .email("ada@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `api_usage` - Create API usage counters
//! - `story` - Create story entities
//! - `tag` - Create tags and story-tag links
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod api_usage;
pub mod helpers;
pub mod story;
pub mod tag;
pub mod user;

pub use api_usage::create_api_usage;
pub use story::create_story;
pub use tag::{create_tag, link_tag};
pub use user::create_user;

pub use super::api_usage::Entity as ApiUsage;
pub use super::resource::Entity as Resource;
pub use super::story::Entity as Story;
pub use super::story_tag::Entity as StoryTag;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;

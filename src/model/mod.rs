//! Wire types shared by request handlers and API documentation.

pub mod api;
pub mod generation;
pub mod resource;
pub mod story;
pub mod user;

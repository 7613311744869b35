//! Small helpers shared across the server layers.

pub mod cookie;
pub mod extract;
pub mod parse;
pub mod password;
pub mod token;
pub mod validation;

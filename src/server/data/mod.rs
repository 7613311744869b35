//! Database repository layer.
//!
//! Each repository wraps a connection reference and performs the CRUD operations for
//! one table (or a table and its join rows). Repositories use SeaORM entity models
//! internally and return domain models from `server::model`.

pub mod api_usage;
pub mod resource;
pub mod story;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;

//! Request middleware and access guards.
//!
//! - `auth` validates the session cookie and exposes the signed-in user to handlers,
//!   with `AuthGuard` for permission checks against the database.
//! - `usage` meters requests per route and spends generation quota.

pub mod auth;
pub mod usage;

#[cfg(test)]
mod test;

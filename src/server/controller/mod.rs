//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into parameter models, call the
//! service layer and convert the resulting domain models back into DTOs. Handlers
//! behind the authentication middleware receive the signed-in user as `AuthUser`;
//! admin handlers additionally re-check permissions with `AuthGuard`.

pub mod admin;
pub mod auth;
pub mod generation;
pub mod story;
pub mod user;

#[cfg(test)]
mod test;

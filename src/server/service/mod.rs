//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories. They validate input, apply
//! business rules, coordinate repository calls (including transactions) and talk to
//! the external text-generation provider. They accept parameter models and return
//! domain models, never DTOs or entity models.

pub mod auth;
pub mod generation;
pub mod story;
pub mod usage;
pub mod user;

//! Story generator backend.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, transactions, provider calls
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Cookie authentication, permission guard, usage metering
//!
//! Supporting modules: `config` (environment), `state` (shared handles), `startup`
//! (tracing, database, HTTP client, CORS), `router` (routes and OpenAPI document) and
//! `util` (tokens, cookies, passwords, validation, extractors).
//!
//! # Request Flow
//!
//! 1. **Router** matches the route under `/api/v1`
//! 2. **Middleware** verifies the `authToken` cookie on protected routes and counts the request
//! 3. **Controller** validates input, converts DTOs to params, calls the service
//! 4. **Service** applies business rules and calls repositories or the provider
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts domain models to DTOs and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
pub mod testing;

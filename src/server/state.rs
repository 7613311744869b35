//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler and
//! middleware through Axum's state extraction. It holds:
//! - Database connection pool
//! - HTTP client for the text-generation provider
//! - Session token signing keys
//! - Provider endpoint settings

use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{config::Config, util::token::SessionTokens};

/// Where and how to reach the text-generation provider.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub url: Url,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

impl ProviderConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            url: config.llm_api_url.clone(),
            api_key: config.llm_api_key.clone(),
            model: config.llm_model.clone(),
        }
    }
}

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `SessionTokens` shares its keys through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client used for provider calls.
    ///
    /// Configured without redirects and with a request timeout.
    pub http_client: reqwest::Client,

    /// Issues and verifies the `authToken` session cookie value.
    pub tokens: SessionTokens,

    /// Text-generation provider settings.
    pub provider: ProviderConfig,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        tokens: SessionTokens,
        provider: ProviderConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            tokens,
            provider,
        }
    }
}

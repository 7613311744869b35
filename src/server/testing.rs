//! Shared fixtures for in-crate tests: application state over an in-memory
//! database and a local stand-in for the text-generation provider.

use std::sync::{Arc, Mutex};

use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use test_utils::{builder::TestBuilder, context::TestContext};
use url::Url;

use crate::server::{
    startup,
    state::{AppState, ProviderConfig},
    util::token::SessionTokens,
};

pub const TEST_JWT_SECRET: &str = "test-secret";

/// Request received by the fake provider.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

/// Local HTTP server answering every generation request with a fixed reply.
pub struct FakeProvider {
    pub config: ProviderConfig,
    pub requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl FakeProvider {
    pub async fn spawn(status: StatusCode, reply: serde_json::Value) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let captured = requests.clone();

        let app = Router::new().route(
            "/generate",
            post(move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
                let captured = captured.clone();
                let reply = reply.clone();
                async move {
                    let authorization = headers
                        .get("authorization")
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_string);
                    captured.lock().unwrap().push(CapturedRequest {
                        authorization,
                        body,
                    });
                    (status, Json(reply))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            config: ProviderConfig {
                url: Url::parse(&format!("http://{}/generate", addr)).unwrap(),
                api_key: Some("test-key".to_string()),
                model: Some("test-model".to_string()),
            },
            requests,
        }
    }

    /// Provider replying with a well-formed story.
    pub async fn with_story() -> Self {
        Self::spawn(
            StatusCode::OK,
            serde_json::json!({ "generated_text": story_text() }),
        )
        .await
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

pub fn story_text() -> String {
    r#"{"title": "The Lighthouse", "paragraphs": ["The lamp went dark.", "Then it sang."]}"#
        .to_string()
}

/// Provider config pointing at a port nothing listens on.
pub async fn unreachable_provider() -> ProviderConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    ProviderConfig {
        url: Url::parse(&format!("http://{}/generate", addr)).unwrap(),
        api_key: None,
        model: None,
    }
}

/// Builds application state over a fresh database with every table.
///
/// The returned context must outlive the state's use.
pub async fn test_state(provider: ProviderConfig) -> (TestContext, AppState) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let state = AppState::new(
        db,
        startup::setup_reqwest_client().unwrap(),
        SessionTokens::new(TEST_JWT_SECRET),
        provider,
    );

    (test, state)
}

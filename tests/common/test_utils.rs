use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use serde_json::Value;
use std::sync::Arc;
use symptom_checker::{
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    llm::LlmClient,
    server::{handlers::AppState, router},
};

use super::MockLlmClient;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            provider: "gemini".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gemini-2.5-flash".to_string(),
        },
    }
}

/// Router backed by the given mock client.
pub fn create_test_app(mock: &MockLlmClient) -> Router {
    let client: Arc<dyn LlmClient> = Arc::new(mock.clone());
    router(AppState::new(Some(client)))
}

/// Router whose client failed to initialize at startup.
pub fn create_unavailable_app() -> Router {
    router(AppState::new(None))
}

pub fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

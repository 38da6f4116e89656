//! Test utilities for integration tests
use std::sync::Arc;
use std::time::Duration;

use axum::{Router, body::Body};

use chat_relay::api::{AppState, app};
use chat_relay::core::AppConfig;

/// Build a config pointed at a stubbed upstream completion API. Retry
/// backoff is shortened so retry paths run fast.
pub fn test_config(upstream_url: &str) -> AppConfig {
    AppConfig {
        openai_api_hostname: upstream_url.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("gpt-4o-mini"),
        request_timeout: Duration::from_secs(5),
        max_message_len: 4096,
        max_retries: 2,
        retry_base_delay: Duration::from_millis(1),
        allowed_origins: vec![],
    }
}

/// Creates a test application router wired to the given upstream.
pub fn test_app(upstream_url: &str) -> Router {
    test_app_with_config(test_config(upstream_url))
}

/// Creates a test application router from an explicit config.
pub fn test_app_with_config(config: AppConfig) -> Router {
    app(Arc::new(AppState::new(config)))
}

/// Read a response body to a string.
pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not UTF-8")
}

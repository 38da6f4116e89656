use std::time::Duration;

use serde::Serialize;
use tokio::time::sleep;

use super::error::RelayError;
use crate::core::AppConfig;
use crate::openai::{CompletionError, Message, Role, completion};

/// A single inbound chat message. Owned by the handling of one request
/// and dropped at response exit.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub text: String,
}

/// The single assistant reply produced by a successful relay call. Role
/// and content are taken from the upstream candidate verbatim.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatReply {
    pub role: Role,
    pub content: String,
}

/// Stateless boundary that forwards one chat message to the generation
/// service and shapes the outcome.
///
/// Holds no per-request state; concurrent calls share only the
/// underlying connection pool, which is safe for concurrent use.
pub struct Relay {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
    request_timeout: Duration,
    max_message_len: usize,
    max_retries: u32,
    retry_base_delay: Duration,
}

impl Relay {
    pub fn new(config: &AppConfig) -> Self {
        // The pool is created once and reused across calls. The full
        // request is bounded per call, so only connection establishment
        // is bounded here.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_hostname: config.openai_api_hostname.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            request_timeout: config.request_timeout,
            max_message_len: config.max_message_len,
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        }
    }

    /// Validate one message, forward it to the generation service, and
    /// shape the result.
    ///
    /// Invalid input fails before any outbound call is made. Transient
    /// upstream failures are retried with exponential backoff up to the
    /// configured budget; a timeout is surfaced on the first occurrence.
    pub async fn handle(&self, request: ChatRequest) -> Result<ChatReply, RelayError> {
        let text = request.text;
        if text.trim().is_empty() {
            return Err(RelayError::InvalidInput(
                "message must not be empty".to_string(),
            ));
        }
        if text.chars().count() > self.max_message_len {
            return Err(RelayError::InvalidInput(format!(
                "message exceeds the maximum length of {} characters",
                self.max_message_len
            )));
        }

        let messages = vec![Message::new(Role::User, &text)];

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.retry_base_delay * 2u32.pow(attempt - 1);
                tracing::debug!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying completion request"
                );
                sleep(delay).await;
            }

            let result = completion(
                &self.client,
                &messages,
                &self.api_hostname,
                &self.api_key,
                &self.model,
                self.request_timeout,
            )
            .await;

            match result {
                Ok(reply) => {
                    return Ok(ChatReply {
                        role: reply.role,
                        content: reply.content,
                    });
                }
                // A timed out generation may still be billed upstream,
                // so the caller decides whether to pay for another one
                Err(CompletionError::Timeout) => return Err(RelayError::UpstreamTimeout),
                Err(CompletionError::Transport(err)) => {
                    tracing::warn!(attempt, "Completion transport error: {}", err);
                }
                Err(CompletionError::Status { code, message }) if is_retryable(code) => {
                    tracing::warn!(attempt, code, "Completion failed upstream: {}", message);
                }
                Err(CompletionError::Status { code, message }) => {
                    return Err(RelayError::UpstreamError { code, message });
                }
                Err(CompletionError::Malformed(detail)) => {
                    return Err(RelayError::UpstreamError {
                        code: 502,
                        message: format!("malformed upstream response: {}", detail),
                    });
                }
            }
        }

        Err(RelayError::UpstreamUnavailable)
    }
}

/// Rate limiting and server side failures are worth another attempt;
/// every other rejection is final.
fn is_retryable(code: u16) -> bool {
    code == 429 || (500..=599).contains(&code)
}

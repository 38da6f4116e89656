use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Failure modes of a single completion attempt. The relay decides
/// which of these are worth another attempt.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request timed out")]
    Timeout,
    #[error("completion request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("completion API returned {code}: {message}")]
    Status { code: u16, message: String },
    #[error("malformed completion response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CompletionError::Timeout
        } else {
            CompletionError::Transport(err)
        }
    }
}

// Response shape of a non-streaming chat completion. Only the fields
// the relay reads are deserialized.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CandidateMessage,
}

// Candidate content can be null upstream (e.g. a refusal), so it only
// becomes a `Message` once content is present.
#[derive(Debug, Deserialize)]
struct CandidateMessage {
    role: Role,
    content: Option<String>,
}

/// Issue a single chat completion request to an OpenAI compatible API
/// and return the first candidate message verbatim.
///
/// The timeout bounds the whole request including reading the body.
pub async fn completion(
    client: &reqwest::Client,
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
    timeout: Duration,
) -> Result<Message, CompletionError> {
    let payload = json!({
        "model": model,
        "messages": messages,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = client
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(timeout)
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CompletionError::Status {
            code: status.as_u16(),
            message: error_message(&body),
        });
    }

    let completion: CompletionResponse = match response.json().await {
        Ok(parsed) => parsed,
        Err(err) if err.is_timeout() => return Err(CompletionError::Timeout),
        Err(err) if err.is_decode() => return Err(CompletionError::Malformed(err.to_string())),
        Err(err) => return Err(CompletionError::Transport(err)),
    };

    let candidate = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::Malformed("response contained no choices".to_string()))?;

    let content = candidate
        .message
        .content
        .ok_or_else(|| CompletionError::Malformed("candidate message had no content".to_string()))?;

    Ok(Message {
        role: candidate.message.role,
        content,
    })
}

/// Pull the human readable message out of an OpenAI style error body,
/// falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

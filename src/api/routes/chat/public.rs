//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::relay::ChatReply;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatReplyResponse {
    pub reply: ChatReply,
}

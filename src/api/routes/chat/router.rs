//! Router for the chat API

use std::sync::Arc;

use axum::{Router, extract::State, routing::post};

use super::public;
use crate::api::state::AppState;
use crate::relay;

type SharedState = Arc<AppState>;

/// Submit a single chat message and return the generated reply.
///
/// The relay is awaited inline so that a client disconnect drops this
/// future and cancels the in-flight upstream call with it.
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<axum::Json<public::ChatReplyResponse>, crate::api::public::ApiError> {
    let request = relay::ChatRequest {
        text: payload.message,
    };
    let reply = state.relay.handle(request).await?;

    Ok(axum::Json(public::ChatReplyResponse { reply }))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}

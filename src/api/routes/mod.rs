//! API routes module

pub mod chat;
mod health;

use std::sync::Arc;

use axum::Router;

use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat routes
        .nest("/chat", chat::router())
        // Health routes
        .nest("/health", health::router())
}

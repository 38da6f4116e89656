//! Router for the health check API

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Report process liveness
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Create the health router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(health))
}

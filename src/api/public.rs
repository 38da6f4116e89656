//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::relay::RelayError;

// Errors

/// Serialized body returned for every failed request.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub struct ApiError(RelayError);

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Always log the error
        tracing::error!("{}", self.0);

        (
            self.0.status_code(),
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

/// Unexpected faults surface as a structured error response rather than
/// an unhandled crash. The cause is logged; the caller sees a generic
/// message.
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Unhandled internal fault: {}", err);
        Self(RelayError::internal())
    }
}

// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}

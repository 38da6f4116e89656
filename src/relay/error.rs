use http::StatusCode;
use thiserror::Error;

/// Failure taxonomy of the relay. Every failed call surfaces exactly one
/// of these; the HTTP layer maps them onto status codes.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Caller error, rejected before any outbound call is made
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The bounded wait elapsed. Not retried automatically so the
    /// caller can decide whether to pay for another generation.
    #[error("the generation service did not respond in time")]
    UpstreamTimeout,

    /// Transient failures exhausted the retry budget
    #[error("the generation service is unavailable")]
    UpstreamUnavailable,

    /// The generation service rejected the request outright, or
    /// returned something the relay could not interpret
    #[error("the generation service rejected the request ({code}): {message}")]
    UpstreamError { code: u16, message: String },
}

impl RelayError {
    /// Generic mapping for faults that have no more specific variant, so
    /// an unexpected failure never propagates raw to the caller. The
    /// underlying cause belongs in the log, not the response body.
    pub fn internal() -> Self {
        RelayError::UpstreamError {
            code: 500,
            message: "unexpected internal error".to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RelayError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            RelayError::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            RelayError::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            RelayError::InvalidInput("empty".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RelayError::UpstreamTimeout.status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            RelayError::UpstreamUnavailable.status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            RelayError::UpstreamError {
                code: 400,
                message: "bad request".to_string()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_internal_is_generic() {
        let err = RelayError::internal();
        match err {
            RelayError::UpstreamError { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "unexpected internal error");
            }
            other => panic!("Expected UpstreamError, got {:?}", other),
        }
    }
}

//! Facade error types.
//!
//! Handler-local failures (`ApiError`) are converted to an HTTP status
//! and a JSON body at the handler boundary and never escape as faults;
//! lifecycle failures (`ServerError`) surface to the process entry
//! point.

use crate::domain::bridge::BridgeError;
use crate::domain::config::ConfigError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// A request-level failure, rendered as `{"error": <message>}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested block hash is not in the chain store.
    #[error("No block with id {0}")]
    BlockNotFound(String),

    /// The block-hash path segment is not valid hex.
    #[error("invalid block hash `{0}`: not hex")]
    InvalidHex(String),

    /// The data bus did not answer within the wait budget.
    #[error("timed out waiting for {0}")]
    UpstreamTimeout(String),
}

impl ApiError {
    /// HTTP status carried by this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BlockNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidHex(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<BridgeError> for ApiError {
    fn from(e: BridgeError) -> Self {
        match e {
            BridgeError::Timeout { name, .. } | BridgeError::Closed { name } => {
                ApiError::UpstreamTimeout(name)
            }
        }
    }
}

/// Server lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_hash() {
        let err = ApiError::BlockNotFound("cc".into());
        assert_eq!(err.to_string(), "No block with id cc");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_hex_is_client_error() {
        let err = ApiError::InvalidHex("zz".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bridge_errors_map_to_timeout() {
        let err: ApiError = BridgeError::Closed {
            name: "connected_peer_addresses".into(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);
        assert!(err.to_string().contains("connected_peer_addresses"));
    }
}

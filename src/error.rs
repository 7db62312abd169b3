//! Error taxonomy for the relay.
//!
//! The reconstructor raises `InvalidTargetUrl` and `UnsupportedScheme`; the
//! transport raises `OriginUnreachable`. Non-2xx origin responses are not
//! errors and never show up here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Boxed error produced by a transport implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid target url '{candidate}': {reason}")]
    InvalidTargetUrl { candidate: String, reason: String },

    #[error("unsupported target scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("origin unreachable: {0}")]
    OriginUnreachable(#[source] BoxError),
}

impl RelayError {
    /// Short label used for metrics and error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            RelayError::InvalidTargetUrl { .. } => "invalid_target",
            RelayError::UnsupportedScheme(_) => "unsupported_scheme",
            RelayError::OriginUnreachable(_) => "origin_unreachable",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidTargetUrl { .. } | RelayError::UnsupportedScheme(_) => {
                StatusCode::BAD_REQUEST
            }
            RelayError::OriginUnreachable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}

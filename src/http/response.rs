//! Client responses for relay failures.
//!
//! The relay core only raises errors; this is where they get a status code,
//! a log line and a metric.

use std::time::Instant;

use axum::response::{IntoResponse, Response};

use crate::error::RelayError;
use crate::observability::metrics::{self, Outcome};

/// Turn a relay error into the response sent to the client.
pub fn error_response(err: RelayError, request_id: &str, path: &str, start: Instant) -> Response {
    let outcome = match &err {
        RelayError::InvalidTargetUrl { .. } | RelayError::UnsupportedScheme(_) => {
            tracing::warn!(request_id = %request_id, path = %path, error = %err, "Rejected target");
            Outcome::InvalidTarget
        }
        RelayError::OriginUnreachable(_) => {
            tracing::error!(request_id = %request_id, path = %path, error = %err, "Origin fetch failed");
            Outcome::OriginUnreachable
        }
    };

    metrics::record_request(outcome, err.status().as_u16(), start);
    err.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_error_statuses() {
        let invalid = error_response(
            RelayError::InvalidTargetUrl {
                candidate: "nope".into(),
                reason: "missing scheme separator".into(),
            },
            "req-1",
            "/nope",
            Instant::now(),
        );
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let unreachable = error_response(
            RelayError::OriginUnreachable("dns failure".into()),
            "req-2",
            "/https://example.invalid/",
            Instant::now(),
        );
        assert_eq!(unreachable.status(), StatusCode::BAD_GATEWAY);
    }
}

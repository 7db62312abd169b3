//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): relayed requests by outcome and status
//! - `relay_request_duration_seconds` (histogram): time until the response
//!   head was ready, by outcome
//!
//! Durations stop at the response head; streamed bodies are not timed.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// How a relayed request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rewritten,
    Passthrough,
    InvalidTarget,
    OriginUnreachable,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Rewritten => "rewritten",
            Outcome::Passthrough => "passthrough",
            Outcome::InvalidTarget => "invalid_target",
            Outcome::OriginUnreachable => "origin_unreachable",
        }
    }
}

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one finished request.
pub fn record_request(outcome: Outcome, status: u16, start: Instant) {
    metrics::counter!(
        "relay_requests_total",
        "outcome" => outcome.as_str(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("relay_request_duration_seconds", "outcome" => outcome.as_str())
        .record(start.elapsed().as_secs_f64());
}

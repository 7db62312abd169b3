//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Relay handler produces:
//!     → logging.rs (structured log events with request IDs)
//!     → metrics.rs (request counters and latency histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;

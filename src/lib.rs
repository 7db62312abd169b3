//! Origin relay library.
//!
//! Relays `GET /<scheme>://<host>/<path>` to the embedded origin and fixes
//! up the response: `content-type` inferred from the path extension and
//! `content-security-policy` removed, so proxied pages can load their
//! assets. Non-2xx origin responses pass through untouched.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod transport;

pub use config::schema::RelayConfig;
pub use error::RelayError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::handle;
pub use transport::{ReqwestTransport, Transport};

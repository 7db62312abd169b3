//! Outbound transport to the origin.
//!
//! # Data Flow
//! ```text
//! relay::handle
//!     → Transport::fetch(origin url)
//!     → client.rs (reqwest GET, streaming body)
//!     → OriginResponse handed back to the rewriter
//! ```
//!
//! The relay only depends on the trait, so tests swap in an in-process
//! origin and the server stays generic over how bytes reach the origin.

pub mod client;

use std::future::Future;

use axum::body::Body;
use axum::http::Response;
use url::Url;

use crate::error::RelayError;

pub use client::ReqwestTransport;

/// Response returned by the origin, body still streaming.
pub type OriginResponse = Response<Body>;

/// Something that can fetch an origin URL.
///
/// Implementations must resolve once the response head is available and
/// must not buffer the body. Network level failures are reported as
/// [`RelayError::OriginUnreachable`].
pub trait Transport: Send + Sync + 'static {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<OriginResponse, RelayError>> + Send;
}

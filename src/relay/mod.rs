//! Request relay core.
//!
//! # Data Flow
//! ```text
//! Inbound request (path, query)
//!     → target.rs (rebuild origin URL from the path)
//!     → Transport::fetch (external collaborator)
//!     → rewrite.rs + mime.rs (content-type, CSP) on 2xx
//!     → Response back to the hosting layer
//! ```
//!
//! Nothing here keeps state between requests.

pub mod mime;
pub mod rewrite;
pub mod target;

use axum::body::Body;
use axum::http::{Request, Response};

use crate::error::RelayError;
use crate::transport::Transport;

pub use rewrite::{origin_ok, rewrite_headers, rewrite_response};
pub use target::{reconstruct_origin_url, IncomingRequest};

/// Relay one request to the origin embedded in its path.
///
/// The request body is ignored and the origin is always fetched with `GET`.
/// Errors are returned to the caller; turning them into a client response is
/// the hosting layer's job.
pub async fn handle<T: Transport>(
    transport: &T,
    request: Request<Body>,
) -> Result<Response<Body>, RelayError> {
    let origin_url = reconstruct_origin_url(&IncomingRequest::from_uri(request.uri()))?;

    tracing::debug!(
        method = %request.method(),
        origin = %origin_url,
        "Fetching origin"
    );

    let origin = transport.fetch(&origin_url).await?;
    Ok(rewrite_response(&origin_url, origin))
}

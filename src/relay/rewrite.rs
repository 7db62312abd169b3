//! Response header rewrite policy.
//!
//! Successful origin responses get a `content-type` inferred from the target
//! path and lose their `content-security-policy`. Status and body are never
//! touched. Anything outside 2xx is handed back exactly as received.

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderValue, Response, StatusCode};
use url::Url;

use crate::relay::mime::guess_mime;

/// Whether the origin answered with a 2xx status.
pub fn origin_ok(status: StatusCode) -> bool {
    status.is_success()
}

/// Derive the outgoing headers from the origin headers.
pub fn rewrite_headers(target: &Url, origin: &HeaderMap) -> HeaderMap {
    let mut headers = origin.clone();

    if let Some(mime) = guess_mime(target.path()) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
    }
    headers.remove(header::CONTENT_SECURITY_POLICY);

    headers
}

/// Apply the rewrite policy to an origin response.
pub fn rewrite_response(target: &Url, origin: Response<Body>) -> Response<Body> {
    if !origin_ok(origin.status()) {
        return origin;
    }

    let (mut parts, body) = origin.into_parts();
    parts.headers = rewrite_headers(target, &parts.headers);
    Response::from_parts(parts, body)
}

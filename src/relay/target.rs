//! Origin URL reconstruction.
//!
//! The inbound path carries the whole target URL after its leading `/`:
//! `/https://example.com/style.css` targets `https://example.com/style.css`.
//! Some clients collapse `//` while building the request, so `:/` is
//! accepted as a scheme separator as well and rewritten to `://`.

use std::sync::OnceLock;

use axum::http::Uri;
use regex::Regex;
use url::Url;

use crate::error::RelayError;

/// Pieces of the inbound request that address the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomingRequest<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> IncomingRequest<'a> {
    pub fn new(path: &'a str, query: Option<&'a str>, fragment: Option<&'a str>) -> Self {
        Self { path, query, fragment }
    }

    /// Borrow path and query from a request URI. HTTP never sends a fragment.
    pub fn from_uri(uri: &'a Uri) -> Self {
        Self {
            path: uri.path(),
            query: uri.query(),
            fragment: None,
        }
    }
}

fn scheme_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r":\/\/?").expect("scheme separator pattern is valid"))
}

/// Rebuild the absolute origin URL embedded in the request path.
pub fn reconstruct_origin_url(request: &IncomingRequest<'_>) -> Result<Url, RelayError> {
    let embedded = request.path.strip_prefix('/').unwrap_or(request.path);

    // Only the first separator counts; the rest belongs to host and path.
    let mut parts = scheme_separator().splitn(embedded, 2);
    let scheme = parts.next().unwrap_or_default();
    let rest = match parts.next() {
        Some(rest) => rest,
        None => {
            return Err(RelayError::InvalidTargetUrl {
                candidate: embedded.to_string(),
                reason: "missing scheme separator".to_string(),
            })
        }
    };

    let mut candidate = format!("{scheme}://{rest}");
    if let Some(query) = request.query.filter(|q| !q.is_empty()) {
        candidate.push('?');
        candidate.push_str(query.strip_prefix('?').unwrap_or(query));
    }
    if let Some(fragment) = request.fragment.filter(|f| !f.is_empty()) {
        candidate.push('#');
        candidate.push_str(fragment.strip_prefix('#').unwrap_or(fragment));
    }

    let url = Url::parse(&candidate).map_err(|e| RelayError::InvalidTargetUrl {
        reason: e.to_string(),
        candidate,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RelayError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(path: &str) -> Result<Url, RelayError> {
        reconstruct_origin_url(&IncomingRequest::new(path, None, None))
    }

    #[test]
    fn test_full_separator() {
        let url = reconstruct("/https://example.com/api/data.json").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/data.json");
    }

    #[test]
    fn test_collapsed_separator() {
        let collapsed = reconstruct("/http:/example.com/index.html").unwrap();
        let full = reconstruct("/http://example.com/index.html").unwrap();
        assert_eq!(collapsed, full);
        assert_eq!(collapsed.as_str(), "http://example.com/index.html");
    }

    #[test]
    fn test_only_first_separator_splits() {
        let url = reconstruct("/https://example.com/redirect/https://other.org/x").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.path(), "/redirect/https://other.org/x");
    }

    #[test]
    fn test_query_and_fragment_appended() {
        let request = IncomingRequest::new(
            "/https://example.com/page.html",
            Some("key=value&foo=bar"),
            Some("section"),
        );
        let url = reconstruct_origin_url(&request).unwrap();
        assert_eq!(url.query(), Some("key=value&foo=bar"));
        assert_eq!(url.fragment(), Some("section"));
        assert_eq!(url.path(), "/page.html");
    }

    #[test]
    fn test_empty_query_is_dropped() {
        let request = IncomingRequest::new("/https://example.com/api", Some(""), None);
        let url = reconstruct_origin_url(&request).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api");
    }

    #[test]
    fn test_from_uri() {
        let uri: Uri = "/https://example.com/api?key=value".parse().unwrap();
        let url = reconstruct_origin_url(&IncomingRequest::from_uri(&uri)).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api?key=value");
    }

    #[test]
    fn test_missing_separator_fails() {
        let err = reconstruct("/example.com/page.html").unwrap_err();
        assert!(matches!(err, RelayError::InvalidTargetUrl { .. }));

        assert!(matches!(
            reconstruct("/").unwrap_err(),
            RelayError::InvalidTargetUrl { .. }
        ));
    }

    #[test]
    fn test_unparseable_target_fails() {
        let err = reconstruct("/https://").unwrap_err();
        assert!(matches!(err, RelayError::InvalidTargetUrl { .. }));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = reconstruct("/ftp://example.com/file.txt").unwrap_err();
        assert!(matches!(err, RelayError::UnsupportedScheme(ref s) if s == "ftp"));
    }

    #[test]
    fn test_reconstruction_is_repeatable() {
        let request = IncomingRequest::new("/https://example.com/a.css", Some("v=1"), None);
        let first = reconstruct_origin_url(&request).unwrap();
        let second = reconstruct_origin_url(&request).unwrap();
        assert_eq!(first, second);
    }
}

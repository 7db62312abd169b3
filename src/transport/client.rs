//! reqwest backed origin transport.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, Response};
use url::Url;

use crate::config::UpstreamConfig;
use crate::error::RelayError;
use crate::transport::{OriginResponse, Transport};

/// Connection scoped headers that describe the origin hop, not the resource.
const HOP_BY_HOP: &[HeaderName] = &[
    header::CONNECTION,
    header::TRANSFER_ENCODING,
    header::TE,
    header::TRAILER,
    header::UPGRADE,
    header::PROXY_AUTHENTICATE,
];

/// Issues a plain `GET` per origin URL over a shared connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn fetch(&self, url: &Url) -> Result<OriginResponse, RelayError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| RelayError::OriginUnreachable(Box::new(e)))?;

        let status = response.status();
        let mut headers = response.headers().clone();
        strip_hop_by_hop(&mut headers);
        // hyper keeps a non-canonical reason phrase here.
        let extensions = response.extensions().clone();

        let mut origin = Response::new(Body::from_stream(response.bytes_stream()));
        *origin.status_mut() = status;
        *origin.headers_mut() = headers;
        *origin.extensions_mut() = extensions;
        Ok(origin)
    }
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in HOP_BY_HOP {
        headers.remove(name);
    }
    headers.remove("keep-alive");
    headers.remove("proxy-connection");
}

//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a single catch-all relay handler
//! - Wire up middleware (tracing, request ID)
//! - Bind server to listener and stop on the shutdown signal
//! - Map relay outcomes to client responses, logs and metrics

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::RelayConfig;
use crate::http::request::{request_id_of, RelayRequestId};
use crate::http::response::error_response;
use crate::observability::metrics::{self, Outcome};
use crate::relay;
use crate::transport::{ReqwestTransport, Transport};

/// Application state injected into handlers.
pub struct AppState<T> {
    pub transport: Arc<T>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server that fetches origins with a reqwest client built
    /// from the upstream config.
    pub fn new(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        let transport = ReqwestTransport::new(&config.upstream)?;
        Ok(Self::with_transport(transport))
    }

    /// Create a server around any transport.
    pub fn with_transport<T: Transport>(transport: T) -> Self {
        Self {
            router: build_router(Arc::new(transport)),
        }
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router<T: Transport>(transport: Arc<T>) -> Router {
    Router::new()
        .route("/{*target}", any(relay_handler::<T>))
        .route("/", any(relay_handler::<T>))
        .with_state(AppState { transport })
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(RelayRequestId))
}

/// Relays the request to the origin named in its path.
async fn relay_handler<T: Transport>(
    State(state): State<AppState<T>>,
    request: Request<Body>,
) -> Response {
    let start = Instant::now();
    let request_id = request_id_of(&request);
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match relay::handle(state.transport.as_ref(), request).await {
        Ok(response) => {
            let status = response.status();
            let outcome = if relay::origin_ok(status) {
                Outcome::Rewritten
            } else {
                Outcome::Passthrough
            };

            tracing::info!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status = status.as_u16(),
                outcome = outcome.as_str(),
                "Relayed"
            );
            metrics::record_request(outcome, status.as_u16(), start);
            response
        }
        Err(err) => error_response(err, &request_id, &path, start),
    }
}

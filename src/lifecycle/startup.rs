//! Startup orchestration.
//!
//! Fail fast: a bad bind address or an unbuildable client aborts startup
//! before any traffic is accepted.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::RelayConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build origin client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid metrics address '{0}'")]
    MetricsAddress(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start every subsystem and serve until a termination signal.
pub async fn run(config: RelayConfig) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        connect_timeout_secs = config.upstream.connect_timeout_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr);
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    let server = HttpServer::new(&config)?;
    server.run(listener, server_shutdown).await?;
    Ok(())
}

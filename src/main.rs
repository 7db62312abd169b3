//! Origin relay.
//!
//! ```text
//!   client ── GET /https://example.com/app.css ──▶ ┌────────────────────────────┐
//!                                                  │ http::server (axum)        │
//!                                                  │   relay::target            │── GET https://example.com/app.css ──▶ origin
//!                                                  │   transport (reqwest)      │
//!   client ◀── body streamed, headers rewritten ── │   relay::rewrite + mime    │◀─────────────────────────────────────
//!                                                  └────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use origin_relay::config;
use origin_relay::lifecycle::startup;
use origin_relay::observability::logging;

#[derive(Parser)]
#[command(name = "origin-relay")]
#[command(about = "Relays requests to the origin URL embedded in their path", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::resolve_config(cli.config.as_deref(), cli.bind) {
        Ok(config) => config,
        Err(e) => {
            match cli.config.as_deref() {
                Some(path) => eprintln!("origin-relay: {}: {}", path.display(), e),
                None => eprintln!("origin-relay: {}", e),
            }
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "origin-relay starting");

    match startup::run(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Fatal error");
            ExitCode::FAILURE
        }
    }
}

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → handed to HttpServer and the transport at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the relay core itself reads none of it
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, RelayConfig, UpstreamConfig};

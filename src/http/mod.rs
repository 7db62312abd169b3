//! HTTP hosting layer.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all route, graceful shutdown)
//!     → request.rs (request ID assigned and propagated)
//!     → relay::handle (reconstruct, fetch, rewrite)
//!     → response.rs (relay errors → client responses)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RelayRequestId, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};

//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS (the service is an open API)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error envelopes (404 bodies are plain text)

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig};

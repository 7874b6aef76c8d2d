//! HTTP server startup with lifecycle management.
//!
//! This module provides a clean API for starting the HTTP server with
//! enhanced error handling and production-ready lifecycle management.

mod error;
mod http_server;
mod lifecycle;
mod shutdown;

use axum::Router;
pub use error::{ServerError, ServerResult};
use http_server::serve_http;
use shutdown::shutdown_signal;

use crate::config::ServerConfig;

/// Starts the HTTP server with graceful shutdown handling.
///
/// # Arguments
///
/// * `app` - The Axum router to serve
/// * `config` - Server configuration including binding and shutdown settings
///
/// # Errors
///
/// Returns an error if:
/// - Server configuration is invalid
/// - Cannot bind to the specified address/port
/// - Server encounters a fatal error during operation
pub async fn serve(app: Router, config: ServerConfig) -> ServerResult<()> {
    serve_http(app, config).await
}

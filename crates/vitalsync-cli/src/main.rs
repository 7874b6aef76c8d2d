#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use axum::Router;
use vitalsync_server::handler::routes;
use vitalsync_server::middleware::{
    RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt, RouterTimingExt,
};
use vitalsync_server::service::{ServiceConfig, ServiceState};

use crate::config::{Cli, MiddlewareConfig};

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "vitalsync_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "vitalsync_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "vitalsync_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.log();
    cli.validate()?;

    let state = ServiceState::from_config(&cli.service);
    let router = create_router(state, &cli.service, &cli.middleware);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Service headers (outermost) - response timing and identification
/// 2. Recovery - catches panics and enforces timeouts
/// 3. Observability - request IDs and tracing spans
/// 4. Metrics - per-route request counters
/// 5. Security - CORS and security headers
/// 6. Routes (innermost) - actual request handlers
fn create_router(
    state: ServiceState,
    config: &ServiceConfig,
    middleware: &MiddlewareConfig,
) -> Router {
    let identity = state.identity.clone();
    let api_routes = routes(config, &middleware.openapi, state);

    api_routes
        .with_security(&middleware.cors)
        .with_metrics()
        .with_observability()
        .with_recovery(&middleware.recovery)
        .with_service_headers(identity)
}

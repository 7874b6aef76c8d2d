//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust
//! use vitalsync_server::handler::routes;
//! use vitalsync_server::middleware::OpenApiConfig;
//! use vitalsync_server::service::{ServiceConfig, ServiceState};
//!
//! let config = ServiceConfig::default();
//! let state = ServiceState::from_config(&config);
//!
//! // Create the complete router with documentation endpoints
//! let app = routes(&config, &OpenApiConfig::default(), state);
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod error;
mod health;
pub mod request;
pub mod response;
mod status;

use aide::axum::ApiRouter;
use axum::Router;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::middleware::{OpenApiConfig, RouterOpenApiExt};
use crate::service::{ServiceConfig, ServiceState};

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`ApiRouter`] with all monitoring routes.
fn api_routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(health::routes())
        .merge(status::routes())
}

/// Returns a [`Router`] with all routes and documentation endpoints.
///
/// API routes are nested under the configured prefix, the OpenAPI
/// specification and its interactive UI are mounted at their configured
/// paths, and the root path redirects to the documentation.
pub fn routes(config: &ServiceConfig, openapi: &OpenApiConfig, state: ServiceState) -> Router {
    let docs_path = openapi.docs_ui.clone();
    let redirect_to_docs = move || {
        let docs_path = docs_path.clone();
        async move { Redirect::temporary(&docs_path) }
    };

    ApiRouter::new()
        .nest(&config.api_prefix, api_routes())
        .with_open_api(openapi)
        .route("/", get(redirect_to_docs))
        .fallback(handler)
        .with_state(state)
}

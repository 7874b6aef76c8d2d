//! Middleware for `axum::Router` and HTTP request processing.
//!
//! This module provides the middleware stack for:
//! - Security (CORS, body limits)
//! - Observability (metrics, tracing, request IDs)
//! - Error handling (panics, timeouts, service errors)
//! - Response timing and service identification headers
//! - OpenAPI documentation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use axum::Router;
//! use vitalsync_core::ServiceIdentity;
//! use vitalsync_server::middleware::{
//!     RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt, RouterTimingExt,
//! };
//!
//! let identity = ServiceIdentity::new("VitalSync", "1.0.0", false);
//! let app = Router::<()>::new()
//!     .with_default_security()
//!     .with_metrics()
//!     .with_observability()
//!     .with_default_recovery()
//!     .with_service_headers(identity);
//! ```

mod observability;
mod recovery;
mod security;
mod specification;
mod timing;

pub use crate::middleware::observability::RouterObservabilityExt;
pub use crate::middleware::recovery::{RecoveryConfig, RouterRecoveryExt};
pub use crate::middleware::security::{CorsConfig, RouterSecurityExt};
pub use crate::middleware::specification::{OpenApiConfig, RouterOpenApiExt};
pub use crate::middleware::timing::{PROCESS_TIME_HEADER, RouterTimingExt, SERVICE_HEADER};

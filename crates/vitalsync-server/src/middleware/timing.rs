//! Response timing and service identification headers.
//!
//! This module stamps every outgoing response with the elapsed processing
//! time and the configured service name, so clients and proxies can
//! attribute latency without parsing the body.

use std::time::Instant;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::{Next, from_fn_with_state};
use axum::response::Response;
use vitalsync_core::ServiceIdentity;

/// Header reporting elapsed request processing time in seconds.
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Header reporting the configured service name.
pub const SERVICE_HEADER: &str = "x-service";

/// Extension trait for `axum::`[`Router`] to stamp service headers.
pub trait RouterTimingExt {
    /// Layers middleware attaching `x-process-time` and `x-service` headers
    /// to every response, including error and fallback responses.
    fn with_service_headers(self, identity: ServiceIdentity) -> Self;
}

impl<S> RouterTimingExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_service_headers(self, identity: ServiceIdentity) -> Self {
        self.layer(from_fn_with_state(identity, attach_service_headers))
    }
}

/// Measures handler latency and stamps the identity headers.
///
/// The processing time is reported in seconds with four decimal places,
/// matching what latency dashboards expect from this service family.
pub async fn attach_service_headers(
    State(identity): State<ServiceIdentity>,
    request: Request,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let mut response = next.run(request).await;

    let elapsed = start_time.elapsed().as_secs_f64();
    let headers = response.headers_mut();

    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed:.4}")) {
        headers.insert(PROCESS_TIME_HEADER, value);
    }

    if let Ok(value) = HeaderValue::from_str(&identity.name) {
        headers.insert(SERVICE_HEADER, value);
    }

    response
}

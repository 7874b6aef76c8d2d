//! Simplified status check handlers.
//!
//! A lightweight counterpart to the health report used by load balancers
//! and uptime probes. Memory is sampled best-effort and the response is
//! wrapped in the standard success envelope.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use vitalsync_core::ServiceIdentity;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::{ApiResponse, SystemStatus};
use crate::service::{HealthService, ServiceState};

/// Tracing target for status check operations.
const TRACING_TARGET: &str = "vitalsync_server::handler::status";

/// Reports a simplified operational status.
///
/// Memory is sampled best-effort: a failed sample reports `0.0` megabytes
/// rather than degrading or erroring.
#[tracing::instrument(skip_all)]
async fn status_check(
    State(identity): State<ServiceIdentity>,
    State(health): State<HealthService>,
) -> Result<(StatusCode, Json<ApiResponse<SystemStatus>>)> {
    tracing::debug!(target: TRACING_TARGET, "Status check requested");

    let memory_mb = health
        .sample_memory()
        .map(|usage| usage.rss_mb)
        .unwrap_or(0.0);
    let status = SystemStatus::running(&identity, memory_mb);

    tracing::info!(
        target: TRACING_TARGET,
        memory_mb = status.memory_mb,
        "Status check response prepared",
    );

    let response = ApiResponse::success(status, "Service status retrieved successfully");
    Ok((StatusCode::OK, Json(response)))
}

fn status_check_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Status check")
        .description(
            "Returns a simplified service status wrapped in the standard \
            response envelope.",
        )
        .response::<200, Json<ApiResponse<SystemStatus>>>()
}

/// Returns routes for simplified status checks.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/status/check", get_with(status_check, status_check_docs))
        .with_path_items(|item| item.tag("Monitoring"))
}

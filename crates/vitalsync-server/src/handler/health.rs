//! Service health reporting handlers.
//!
//! This module exposes the detailed health report for the running process.
//! The endpoint never fails: when runtime sampling is unavailable the
//! report downgrades to `degraded` instead of returning an error status.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use vitalsync_core::ServiceIdentity;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::StatusReport;
use crate::service::{HealthService, ServiceState};

/// Tracing target for health reporting operations.
const TRACING_TARGET: &str = "vitalsync_server::handler::health";

/// Reports the current health of the running service.
///
/// Returns uptime, memory usage and environment metadata while sampling
/// works, and a `degraded` report without the runtime keys when it does not.
#[tracing::instrument(skip_all)]
async fn health_status(
    State(identity): State<ServiceIdentity>,
    State(health): State<HealthService>,
) -> Result<(StatusCode, Json<StatusReport>)> {
    tracing::debug!(target: TRACING_TARGET, "Health status requested");

    let report = health.status_report(&identity);

    tracing::info!(
        target: TRACING_TARGET,
        status = %report.status,
        uptime = report.uptime,
        "Health status response prepared",
    );

    Ok((StatusCode::OK, Json(report)))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Health status")
        .description(
            "Returns the detailed health report for the service process. \
            Responds 200 even when monitoring detail is reduced.",
        )
        .response::<200, Json<StatusReport>>()
}

/// Returns routes for service health reporting.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/health/status", get_with(health_status, health_status_docs))
        .with_path_items(|item| item.tag("Monitoring"))
}

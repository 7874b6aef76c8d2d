//! Operational status response types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vitalsync_core::ServiceIdentity;

/// Coarse operational snapshot of the running service.
///
/// Unlike the health report, this shape is always fully populated: a
/// failed memory sample degrades to `0.0` rather than dropping the key.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SystemStatus {
    /// Lifecycle state of the process; always `"running"` while serving.
    pub status: String,
    /// Configured service name.
    pub service: String,
    /// Configured service version.
    pub version: String,
    /// Resident memory of the current process in megabytes.
    pub memory_mb: f64,
    /// Deployment environment derived from the debug flag.
    pub environment: String,
}

impl SystemStatus {
    /// Builds a snapshot for a serving process.
    pub fn running(identity: &ServiceIdentity, memory_mb: f64) -> Self {
        Self {
            status: "running".to_owned(),
            service: identity.name.clone(),
            version: identity.version.clone(),
            memory_mb,
            environment: identity.environment().to_owned(),
        }
    }
}

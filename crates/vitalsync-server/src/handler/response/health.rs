//! Health reporting response types.

use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vitalsync_core::{EnvironmentInfo, MemoryUsage, ServiceIdentity, ServiceStatus};

/// Point-in-time health report for the running service.
///
/// A `healthy` report carries the full runtime picture; a `degraded`
/// report omits the `uptime` and `memory_usage` keys entirely and
/// explains the reduced detail in `message`.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatusReport {
    /// Overall service status.
    pub status: ServiceStatus,
    /// Configured service name.
    pub service: String,
    /// Configured service version.
    pub version: String,
    /// Moment this report was assembled.
    pub timestamp: Timestamp,
    /// Runtime environment descriptors.
    pub environment: EnvironmentInfo,
    /// Seconds elapsed since the service started. Absent when degraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<f64>,
    /// Memory footprint of the current process. Absent when degraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<MemoryUsage>,
    /// Human-readable summary of the service condition.
    pub message: String,
}

impl StatusReport {
    /// Assembles a healthy report with the full runtime picture.
    pub fn healthy(
        identity: &ServiceIdentity,
        uptime: f64,
        memory_usage: MemoryUsage,
        environment: EnvironmentInfo,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: ServiceStatus::Healthy,
            service: identity.name.clone(),
            version: identity.version.clone(),
            timestamp: Timestamp::now(),
            environment,
            uptime: Some(uptime),
            memory_usage: Some(memory_usage),
            message: message.into(),
        }
    }

    /// Assembles a degraded report without the runtime detail keys.
    pub fn degraded(
        identity: &ServiceIdentity,
        environment: EnvironmentInfo,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status: ServiceStatus::Degraded,
            service: identity.name.clone(),
            version: identity.version.clone(),
            timestamp: Timestamp::now(),
            environment,
            uptime: None,
            memory_usage: None,
            message: message.into(),
        }
    }

    /// Returns true if this report signals reduced monitoring detail.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.status.is_degraded()
    }
}

//! Process memory sampling for health reports.
//!
//! This module provides [`MemoryUsage`], a point-in-time snapshot of the
//! current process memory footprint, sampled through `sysinfo`. Sampling is
//! fallible: platforms without process statistics and transient refresh
//! failures surface as [`SampleError`] so callers can degrade gracefully
//! instead of failing a request.

use serde::{Deserialize, Serialize};
use sysinfo::{ProcessesToUpdate, System};

use crate::TRACING_TARGET_MEMORY;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Point-in-time memory footprint of the current process.
///
/// All values are rounded to two decimal places when the snapshot is
/// constructed, matching the precision reported over the wire.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct MemoryUsage {
    /// Resident set size in megabytes.
    pub rss_mb: f64,
    /// Virtual memory size in megabytes.
    pub vms_mb: f64,
    /// Resident set size as a percentage of total system memory.
    pub percent: f64,
}

/// Error raised when a memory snapshot cannot be taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    /// The platform does not expose process memory statistics.
    #[error("memory statistics unsupported: {0}")]
    Unsupported(&'static str),

    /// The platform is supported but the snapshot failed.
    #[error("memory sampling failed: {0}")]
    Failed(String),
}

impl MemoryUsage {
    /// Creates a snapshot from raw megabyte and percentage values.
    ///
    /// Values are rounded to two decimal places.
    #[must_use]
    pub fn new(rss_mb: f64, vms_mb: f64, percent: f64) -> Self {
        Self {
            rss_mb: round_2dp(rss_mb),
            vms_mb: round_2dp(vms_mb),
            percent: round_2dp(percent),
        }
    }

    /// Samples the memory footprint of the current process.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::Unsupported`] on platforms without process
    /// statistics and [`SampleError::Failed`] when the refresh does not
    /// yield usable numbers.
    pub fn sample() -> Result<Self, SampleError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(SampleError::Unsupported(
                "process statistics are not available on this platform",
            ));
        }

        let pid = sysinfo::get_current_pid().map_err(SampleError::Unsupported)?;

        let mut system = System::new();
        system.refresh_memory();
        system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

        let process = system.process(pid).ok_or_else(|| {
            tracing::warn!(
                target: TRACING_TARGET_MEMORY,
                pid = pid.as_u32(),
                "current process missing from refreshed process table"
            );
            SampleError::Failed(format!("process {pid} not found in process table"))
        })?;

        let total_memory = system.total_memory();
        if total_memory == 0 {
            tracing::warn!(
                target: TRACING_TARGET_MEMORY,
                "system reported zero total memory"
            );
            return Err(SampleError::Failed(
                "system reported zero total memory".to_owned(),
            ));
        }

        let rss_bytes = process.memory();
        let vms_bytes = process.virtual_memory();
        let percent = rss_bytes as f64 / total_memory as f64 * 100.0;

        Ok(Self::new(
            rss_bytes as f64 / BYTES_PER_MB,
            vms_bytes as f64 / BYTES_PER_MB,
            percent,
        ))
    }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

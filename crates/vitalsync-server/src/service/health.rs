//! Process health sampling for the monitoring endpoints.
//!
//! This module tracks the service start time and samples process memory on
//! demand. Handlers turn the sampled values into health reports, so a failed
//! sample never fails a request.

use std::time::Instant;

use vitalsync_core::{EnvironmentInfo, MemoryUsage, SampleError, ServiceIdentity};

use crate::handler::response::StatusReport;

/// Tracing target for health service operations.
const TRACING_TARGET_HEALTH: &str = "vitalsync_server::service::health";

/// Message reported while the full runtime picture is available.
const HEALTHY_MESSAGE: &str = "Service is running normally";

/// Message reported while memory statistics are unavailable.
const DEGRADED_MESSAGE: &str = "Service is running with limited monitoring detail";

/// Function used to read process memory statistics.
///
/// Defaults to [`MemoryUsage::sample`]. Tests swap in deterministic samplers
/// to exercise the degraded reporting path.
pub type MemorySampler = fn() -> Result<MemoryUsage, SampleError>;

/// Health monitoring service tracking uptime and process memory.
///
/// The service is `Clone` and cheap to copy: it carries the startup instant
/// and a sampler function pointer. All clones report uptime relative to the
/// same startup instant.
#[derive(Debug, Clone)]
pub struct HealthService {
    /// Instant the service was constructed, used as the uptime origin.
    started_at: Instant,
    /// Reads current process memory statistics.
    sampler: MemorySampler,
}

impl HealthService {
    /// Creates a new health service anchored at the current instant.
    pub fn new() -> Self {
        tracing::debug!(
            target: TRACING_TARGET_HEALTH,
            "health service initialized"
        );

        Self {
            started_at: Instant::now(),
            sampler: MemoryUsage::sample,
        }
    }

    /// Replaces the memory sampler while keeping the startup instant.
    pub fn with_sampler(self, sampler: MemorySampler) -> Self {
        Self { sampler, ..self }
    }

    /// Returns seconds elapsed since the service started.
    ///
    /// The value is monotonic: it never decreases between calls and grows
    /// with wall-clock time while the process is running.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    /// Assembles a point-in-time health report for the given identity.
    ///
    /// Sampling failure is data, not an error: the report degrades to the
    /// reduced shape and the request still succeeds. The timestamp is taken
    /// at assembly.
    pub fn status_report(&self, identity: &ServiceIdentity) -> StatusReport {
        let uptime = self.uptime_seconds();
        let environment = EnvironmentInfo::capture();

        match self.sample_memory() {
            Ok(memory_usage) => StatusReport::healthy(
                identity,
                uptime,
                memory_usage,
                environment,
                HEALTHY_MESSAGE,
            ),
            Err(_) => StatusReport::degraded(identity, environment, DEGRADED_MESSAGE),
        }
    }

    /// Samples current process memory statistics.
    ///
    /// # Errors
    ///
    /// Returns the sampler error when process statistics are unavailable.
    /// The failure is logged here so callers can degrade without extra
    /// bookkeeping.
    pub fn sample_memory(&self) -> Result<MemoryUsage, SampleError> {
        match (self.sampler)() {
            Ok(usage) => {
                tracing::trace!(
                    target: TRACING_TARGET_HEALTH,
                    rss_mb = usage.rss_mb,
                    vms_mb = usage.vms_mb,
                    percent = usage.percent,
                    "memory sample collected"
                );
                Ok(usage)
            }
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET_HEALTH,
                    error = %error,
                    "memory sample failed"
                );
                Err(error)
            }
        }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn uptime_grows_between_reads() {
        let health = HealthService::new();

        let first = health.uptime_seconds();
        std::thread::sleep(Duration::from_millis(15));
        let second = health.uptime_seconds();

        assert!(first >= 0.0);
        assert!(second > first);
    }

    #[test]
    fn clones_share_the_startup_instant() {
        let health = HealthService::new();
        std::thread::sleep(Duration::from_millis(5));

        let clone = health.clone();
        let original_uptime = health.uptime_seconds();
        let clone_uptime = clone.uptime_seconds();

        assert!((original_uptime - clone_uptime).abs() < 0.05);
    }

    #[test]
    fn custom_sampler_reports_values() {
        let health =
            HealthService::new().with_sampler(|| Ok(MemoryUsage::new(128.0, 256.0, 3.14)));

        let usage = health.sample_memory().unwrap();
        assert_eq!(usage.rss_mb, 128.0);
        assert_eq!(usage.vms_mb, 256.0);
        assert_eq!(usage.percent, 3.14);
    }

    #[test]
    fn failing_sampler_surfaces_the_error() {
        let health = HealthService::new()
            .with_sampler(|| Err(SampleError::Unsupported("no process table")));

        let error = health.sample_memory().unwrap_err();
        assert!(matches!(error, SampleError::Unsupported(_)));
    }

    #[test]
    fn report_is_healthy_while_sampling_works() {
        let identity = ServiceIdentity::new("VitalSync", "0.1.0", false);
        let health =
            HealthService::new().with_sampler(|| Ok(MemoryUsage::new(100.0, 200.0, 1.5)));

        let report = health.status_report(&identity);

        assert!(!report.is_degraded());
        assert_eq!(report.service, "VitalSync");
        assert!(report.uptime.unwrap() >= 0.0);
        assert_eq!(report.memory_usage.unwrap().rss_mb, 100.0);
        assert!(!report.message.is_empty());
    }

    #[test]
    fn report_degrades_when_sampling_fails() {
        let identity = ServiceIdentity::new("VitalSync", "0.1.0", false);
        let health = HealthService::new()
            .with_sampler(|| Err(SampleError::Failed("refresh yielded nothing".to_owned())));

        let report = health.status_report(&identity);

        assert!(report.is_degraded());
        assert!(report.uptime.is_none());
        assert!(report.memory_usage.is_none());
        assert!(!report.message.is_empty());
    }

    #[test]
    fn report_uptime_tracks_elapsed_time() {
        let identity = ServiceIdentity::new("VitalSync", "0.1.0", false);
        let health = HealthService::new().with_sampler(|| Ok(MemoryUsage::new(1.0, 2.0, 0.1)));

        let first = health.status_report(&identity);
        std::thread::sleep(Duration::from_millis(100));
        let second = health.status_report(&identity);

        assert!(second.uptime.unwrap() >= first.uptime.unwrap() + 0.09);
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn default_sampler_is_wired() {
        let health = HealthService::default();

        // The default sampler reads real process statistics. On supported
        // platforms it reports a positive resident set.
        match health.sample_memory() {
            Ok(usage) => assert!(usage.rss_mb > 0.0),
            Err(error) => assert!(matches!(
                error,
                SampleError::Unsupported(_) | SampleError::Failed(_)
            )),
        }
    }
}

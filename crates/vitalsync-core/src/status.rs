//! Operational status reported by the health endpoints.
//!
//! This module provides the [`ServiceStatus`] enum used by health reports.
//! A degraded service keeps answering requests; the status only changes the
//! payload, never the HTTP status code.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Operational status of the running service.
///
/// The service reports `Healthy` when all runtime probes succeed and
/// `Degraded` when at least one probe fails. There is no terminal state:
/// a degraded service still serves traffic and recovers on its own once
/// the probes succeed again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// All runtime probes succeeded
    #[default]
    Healthy,
    /// One or more probes failed but the service keeps running
    Degraded,
}

impl ServiceStatus {
    /// Check if the service is fully operational
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Check if the service is running with reduced capability
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        assert!(ServiceStatus::Healthy.is_healthy());
        assert!(!ServiceStatus::Healthy.is_degraded());

        assert!(ServiceStatus::Degraded.is_degraded());
        assert!(!ServiceStatus::Degraded.is_healthy());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ServiceStatus::Healthy.to_string(), "healthy");
        assert_eq!(ServiceStatus::Degraded.to_string(), "degraded");
    }

    #[test]
    fn test_status_from_str() {
        use std::str::FromStr;

        assert_eq!(
            ServiceStatus::from_str("healthy").unwrap(),
            ServiceStatus::Healthy
        );
        assert_eq!(
            ServiceStatus::from_str("degraded").unwrap(),
            ServiceStatus::Degraded
        );
        assert!(ServiceStatus::from_str("unhealthy").is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(ServiceStatus::default(), ServiceStatus::Healthy);
    }

    #[test]
    fn test_serialization() {
        let status = ServiceStatus::Degraded;
        let serialized = serde_json::to_string(&status).unwrap();
        assert_eq!(serialized, "\"degraded\"");

        let deserialized: ServiceStatus = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, status);
    }
}

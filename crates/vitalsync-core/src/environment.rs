//! Runtime environment description for health reports.
//!
//! This module provides the [`EnvironmentInfo`] descriptor included in every
//! health report. Values are captured from compile-time metadata, so they
//! stay constant for the lifetime of the process.

use std::env;

use serde::{Deserialize, Serialize};

/// Sentinel used when an environment value cannot be determined.
const UNKNOWN: &str = "unknown";

/// Description of the runtime environment the service was built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct EnvironmentInfo {
    /// Minimum Rust toolchain version the service was compiled against.
    pub rust_version: String,
    /// Operating system the service is running on.
    pub platform: String,
    /// CPU architecture the service is running on.
    pub architecture: String,
}

impl EnvironmentInfo {
    /// Captures the environment of the running process.
    ///
    /// Fields that cannot be determined fall back to `"unknown"` instead
    /// of failing, so a health report can always be assembled.
    #[must_use]
    pub fn capture() -> Self {
        Self {
            rust_version: non_empty(env!("CARGO_PKG_RUST_VERSION")),
            platform: non_empty(env::consts::OS),
            architecture: non_empty(env::consts::ARCH),
        }
    }
}

impl Default for EnvironmentInfo {
    fn default() -> Self {
        Self {
            rust_version: UNKNOWN.to_string(),
            platform: UNKNOWN.to_string(),
            architecture: UNKNOWN.to_string(),
        }
    }
}

fn non_empty(value: &str) -> String {
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_is_populated() {
        let env = EnvironmentInfo::capture();

        assert!(!env.rust_version.is_empty());
        assert!(!env.platform.is_empty());
        assert!(!env.architecture.is_empty());
    }

    #[test]
    fn test_capture_is_stable() {
        assert_eq!(EnvironmentInfo::capture(), EnvironmentInfo::capture());
    }

    #[test]
    fn test_default_uses_sentinel() {
        let env = EnvironmentInfo::default();

        assert_eq!(env.rust_version, "unknown");
        assert_eq!(env.platform, "unknown");
        assert_eq!(env.architecture, "unknown");
    }

    #[test]
    fn test_non_empty_fallback() {
        assert_eq!(non_empty(""), "unknown");
        assert_eq!(non_empty("linux"), "linux");
    }

    #[test]
    fn test_serialization_field_names() {
        let env = EnvironmentInfo::capture();
        let value = serde_json::to_value(&env).unwrap();

        assert!(value.get("rust_version").is_some());
        assert!(value.get("platform").is_some());
        assert!(value.get("architecture").is_some());
    }
}

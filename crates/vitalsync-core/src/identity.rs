//! Service identity shared by health and status reports.

use serde::{Deserialize, Serialize};

/// Identity of the running service as it appears in reports and headers.
///
/// The identity is assembled once from configuration at startup and then
/// cloned wherever a report needs the service name or version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ServiceIdentity {
    /// Human readable service name.
    pub name: String,
    /// Service version string.
    pub version: String,
    /// Whether the service runs with debug behavior enabled.
    pub debug: bool,
}

impl ServiceIdentity {
    /// Creates a new service identity.
    pub fn new(name: impl Into<String>, version: impl Into<String>, debug: bool) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            debug,
        }
    }

    /// Returns the deployment environment derived from the debug flag.
    #[must_use]
    pub fn environment(&self) -> &'static str {
        if self.debug { "development" } else { "production" }
    }

    /// Check if the service runs in development mode
    #[must_use]
    pub fn is_development(&self) -> bool {
        self.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_follows_debug_flag() {
        let dev = ServiceIdentity::new("VitalSync", "0.1.0", true);
        assert_eq!(dev.environment(), "development");
        assert!(dev.is_development());

        let prod = ServiceIdentity::new("VitalSync", "0.1.0", false);
        assert_eq!(prod.environment(), "production");
        assert!(!prod.is_development());
    }

    #[test]
    fn test_serialization() {
        let identity = ServiceIdentity::new("VitalSync", "1.2.3", false);
        let value = serde_json::to_value(&identity).unwrap();

        assert_eq!(value["name"], "VitalSync");
        assert_eq!(value["version"], "1.2.3");
        assert_eq!(value["debug"], false);
    }
}

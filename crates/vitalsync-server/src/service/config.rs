#[cfg(any(test, feature = "config"))]
use clap::Args;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use vitalsync_core::ServiceIdentity;

/// Default values for configuration options.
mod defaults {
    /// Default public service name.
    pub const SERVICE_NAME: &str = "VitalSync";

    /// Default API route prefix.
    pub const API_PREFIX: &str = "/api/v1";

    /// Default debug mode flag.
    pub const DEBUG: bool = false;

    /// Default service version, taken from the crate manifest.
    pub fn service_version() -> String {
        env!("CARGO_PKG_VERSION").to_owned()
    }
}

/// App [`state`] configuration.
///
/// [`state`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[cfg_attr(any(test, feature = "config"), derive(Args))]
#[must_use = "config does nothing unless you use it"]
#[builder(
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate")
)]
pub struct ServiceConfig {
    /// Public service name reported by health and status endpoints.
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long, env = "SERVICE_NAME", default_value = "VitalSync")
    )]
    #[builder(default = "defaults::SERVICE_NAME.to_string()")]
    pub service_name: String,

    /// Service version reported by health and status endpoints.
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long, env = "SERVICE_VERSION", default_value = env!("CARGO_PKG_VERSION"))
    )]
    #[builder(default = "defaults::service_version()")]
    pub service_version: String,

    /// Whether the service runs in debug (development) mode.
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long, env = "DEBUG", default_value = "false")
    )]
    #[builder(default = "defaults::DEBUG")]
    pub debug: bool,

    /// Route prefix under which all API endpoints are nested.
    #[cfg_attr(
        any(test, feature = "config"),
        arg(long, env = "API_PREFIX", default_value = "/api/v1")
    )]
    #[builder(default = "defaults::API_PREFIX.to_string()")]
    pub api_prefix: String,
}

impl ServiceConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Returns the identity advertised by health and status endpoints.
    pub fn identity(&self) -> ServiceIdentity {
        ServiceIdentity::new(&self.service_name, &self.service_version, self.debug)
    }
}

impl ServiceConfigBuilder {
    /// Wrapper for builder validation that returns String errors.
    fn validate(builder: &ServiceConfigBuilder) -> Result<(), String> {
        // Validate service name
        if let Some(name) = &builder.service_name
            && name.trim().is_empty()
        {
            return Err("Service name cannot be empty".to_string());
        }

        // Validate service version
        if let Some(version) = &builder.service_version
            && version.trim().is_empty()
        {
            return Err("Service version cannot be empty".to_string());
        }

        // Validate API prefix format
        if let Some(prefix) = &builder.api_prefix {
            if !prefix.starts_with('/') {
                return Err("API prefix must start with '/'".to_string());
            }

            if prefix.len() > 1 && prefix.ends_with('/') {
                return Err("API prefix cannot end with '/'".to_string());
            }
        }

        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: defaults::SERVICE_NAME.to_string(),
            service_version: defaults::service_version(),
            debug: defaults::DEBUG,
            api_prefix: defaults::API_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_defaults() -> Result<(), ServiceConfigBuilderError> {
        let config = ServiceConfig::builder().build()?;

        assert_eq!(config.service_name, "VitalSync");
        assert_eq!(config.service_version, env!("CARGO_PKG_VERSION"));
        assert!(!config.debug);
        assert_eq!(config.api_prefix, "/api/v1");
        Ok(())
    }

    #[test]
    fn builder_rejects_empty_service_name() {
        let result = ServiceConfig::builder().with_service_name("  ").build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_rejects_relative_api_prefix() {
        let result = ServiceConfig::builder().with_api_prefix("api/v1").build();
        assert!(result.is_err());
    }

    #[test]
    fn builder_rejects_trailing_slash_api_prefix() {
        let result = ServiceConfig::builder().with_api_prefix("/api/v1/").build();
        assert!(result.is_err());
    }

    #[test]
    fn identity_reflects_config() -> Result<(), ServiceConfigBuilderError> {
        let config = ServiceConfig::builder()
            .with_service_name("VitalSync")
            .with_service_version("2.1.0")
            .with_debug(true)
            .build()?;

        let identity = config.identity();
        assert_eq!(identity.name, "VitalSync");
        assert_eq!(identity.version, "2.1.0");
        assert!(identity.debug);
        assert_eq!(identity.environment(), "development");
        Ok(())
    }
}

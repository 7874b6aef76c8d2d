//! Application state and dependency injection.

mod config;
mod health;

use vitalsync_core::ServiceIdentity;

pub use crate::service::config::ServiceConfig;
pub use crate::service::health::{HealthService, MemorySampler};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    /// Identity advertised by health and status endpoints.
    pub identity: ServiceIdentity,
    /// Uptime tracking and process memory sampling.
    pub health: HealthService,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// The uptime origin is anchored here, so state should be built once at
    /// startup and cloned into the router.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            identity: config.identity(),
            health: HealthService::new(),
        }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(identity: ServiceIdentity);
impl_di!(health: HealthService);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_carries_identity_from_config() {
        let config = ServiceConfig::default();
        let state = ServiceState::from_config(&config);

        assert_eq!(state.identity.name, config.service_name);
        assert_eq!(state.identity.version, config.service_version);
        assert_eq!(state.identity.debug, config.debug);
    }

    #[test]
    fn state_extracts_components() {
        use axum::extract::FromRef;

        let state = ServiceState::from_config(&ServiceConfig::default());

        let identity = ServiceIdentity::from_ref(&state);
        assert_eq!(identity, state.identity);

        let health = HealthService::from_ref(&state);
        assert!(health.uptime_seconds() >= 0.0);
    }
}

//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. The service keeps
//! no per-user data; state is read-only configuration plus the metrics handle.

use crate::config::AppConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
///
/// - `config`: Wrapped in Arc, cloning is O(1)
/// - `metrics`: PrometheusHandle is internally Arc'd, absent when the exporter is disabled
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Handle used to render the Prometheus exposition
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state
    ///
    /// Pass `None` for `metrics` only when `config.telemetry.metrics_enabled` is off;
    /// otherwise readiness reports the service as not ready.
    pub fn new(config: AppConfig, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the metrics handle, if the exporter is installed
    #[inline]
    pub fn metrics(&self) -> Option<&PrometheusHandle> {
        self.metrics.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_state_clone_shares_config() {
        let state = AppState::new(AppConfig::default(), None);
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
        assert!(cloned.metrics().is_none());
    }

    #[test]
    fn test_state_with_metrics_handle() {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let state = AppState::new(AppConfig::default(), Some(handle));
        assert!(state.metrics().is_some());
        assert_eq!(state.config().server.port, 8080);
    }
}

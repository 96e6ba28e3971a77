//! Prometheus metrics for the hat services.
//!
//! This module provides:
//! - [`MetricsConfig`]: Configuration for the metrics system
//! - [`init_metrics`]: Initialize the Prometheus metrics recorder
//! - [`metrics_handler`]: Axum handler for the metrics endpoint
//! - Business metric helpers for lookups and producer calls
//!
//! # Example
//!
//! ```no_run
//! use hats_service_shared::metrics::{MetricsConfig, init_metrics, metrics_handler};
//! use axum::{Router, routing::get};
//!
//! let config = MetricsConfig::default();
//! init_metrics(&config).expect("failed to initialize metrics");
//!
//! let app: Router = Router::new()
//!     .route(&config.path, get(metrics_handler));
//! ```

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::health::{HEALTH_LIVE_ROUTE, HEALTH_READY_ROUTE};
use crate::request::{HATS_ROUTE, WEARHAT_ROUTE};

/// Default path of the metrics endpoint.
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

/// Routes the services register besides the metrics endpoint.
const RESERVED_ROUTES: [&str; 4] = [
    HATS_ROUTE,
    WEARHAT_ROUTE,
    HEALTH_LIVE_ROUTE,
    HEALTH_READY_ROUTE,
];

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Whether metrics collection is enabled.
    pub enabled: bool,
    /// Path for the metrics endpoint (e.g., "/metrics").
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: DEFAULT_METRICS_PATH.to_string(),
        }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// - `METRICS_ENABLED`: "true" or "false" (default: true)
    /// - `METRICS_PATH`: Path for metrics endpoint (default: "/metrics")
    ///
    /// A `METRICS_PATH` that is not a plain absolute path, or that names a
    /// route already registered by the services, is replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = lookup("METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let path = match lookup("METRICS_PATH") {
            Some(p) if is_usable_metrics_path(&p) => p,
            Some(p) => {
                tracing::warn!(
                    path = %p,
                    fallback = DEFAULT_METRICS_PATH,
                    "ignoring unusable METRICS_PATH"
                );
                DEFAULT_METRICS_PATH.to_string()
            }
            None => DEFAULT_METRICS_PATH.to_string(),
        };

        Self { enabled, path }
    }
}

/// Whether `path` can be registered as the metrics route without clashing.
///
/// Rejects relative paths, route parameters and wildcards, and any route
/// the services already register.
fn is_usable_metrics_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.contains(['{', '}', '*'])
        && !RESERVED_ROUTES.contains(&path)
}

/// Initialize the Prometheus metrics recorder.
///
/// This must be called once at application startup before any metrics are recorded.
///
/// # Errors
///
/// Returns an error if:
/// - Metrics are disabled in configuration
/// - The recorder has already been installed
/// - The Prometheus builder fails to install
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }

    if PROMETHEUS_HANDLE.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)?;

    Ok(())
}

/// Axum handler for the metrics endpoint.
///
/// Returns Prometheus exposition format text.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone)]
pub enum MetricsError {
    /// Metrics are disabled in configuration.
    Disabled,
    /// The recorder has already been installed.
    AlreadyInitialized,
    /// The Prometheus builder failed to install.
    InstallFailed(String),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::Disabled => write!(f, "metrics are disabled"),
            MetricsError::AlreadyInitialized => write!(f, "metrics recorder already initialized"),
            MetricsError::InstallFailed(e) => {
                write!(f, "failed to install metrics recorder: {}", e)
            }
        }
    }
}

impl std::error::Error for MetricsError {}

// =============================================================================
// Business Metrics Helpers
// =============================================================================

/// Record the outcome of a catalog lookup.
///
/// Increments `hats_lookups_total`.
///
/// # Arguments
///
/// * `outcome` - "found", "not_found", or "invalid"
/// * `service` - The service name (e.g., "producer", "stub-producer")
pub fn record_hat_lookup(outcome: &str, service: &str) {
    metrics::counter!(
        "hats_lookups_total",
        "outcome" => outcome.to_string(),
        "service" => service.to_string()
    )
    .increment(1);
}

/// Record the outcome of a consumer call to the producer.
///
/// Increments `hats_producer_calls_total`.
///
/// # Arguments
///
/// * `outcome` - "ok", "not_found", "unexpected_status", or "transport_error"
pub fn record_producer_call(outcome: &str) {
    metrics::counter!(
        "hats_producer_calls_total",
        "outcome" => outcome.to_string()
    )
    .increment(1);
}

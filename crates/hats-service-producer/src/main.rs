//! Hat catalog producer HTTP microservice.
//!
//! # Configuration
//!
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `HATS_CATALOG_PATH` - JSON catalog file (default: built-in seed catalog)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` / `METRICS_PATH` - Prometheus endpoint toggles

use std::net::SocketAddr;

use tracing::{error, info};

use hats_service_producer::router;
use hats_service_shared::config::DEFAULT_PRODUCER_PORT;
use hats_service_shared::{
    init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig, ProducerConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("producer");
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let config = ProducerConfig::from_env(DEFAULT_PRODUCER_PORT);
    info!(
        port = config.port,
        catalog_path = ?config.catalog_path,
        "starting producer service"
    );

    let state = AppState::load(config.catalog_path.as_deref()).map_err(|e| {
        error!(error = %e, "failed to load application state");
        e
    })?;

    info!(hats = state.catalog().len(), ids = ?state.catalog().ids(), "application state loaded");

    let app = router(state, &metrics_config.path);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

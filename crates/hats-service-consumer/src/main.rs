//! Hat consumer HTTP microservice.
//!
//! # Configuration
//!
//! - `SERVICE_PORT` - HTTP port (default: 8081)
//! - `PRODUCER_URL` - Producer base URL (default: http://localhost:8080)
//! - `PRODUCER_TIMEOUT_MS` - Producer call timeout (default: 5000)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` / `METRICS_PATH` - Prometheus endpoint toggles

use std::net::SocketAddr;

use tracing::info;

use hats_service_consumer::{router, ConsumerState, ProducerClient};
use hats_service_shared::{
    init_logging, init_metrics, ConsumerConfig, LoggingConfig, MetricsConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("consumer");
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let config = ConsumerConfig::from_env();
    info!(
        port = config.port,
        producer_url = %config.producer_url,
        timeout_ms = config.producer_timeout.as_millis() as u64,
        "starting consumer service"
    );

    let producer = ProducerClient::new(config.producer_url, config.producer_timeout)?;
    let app = router(ConsumerState::new(producer), &metrics_config.path);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

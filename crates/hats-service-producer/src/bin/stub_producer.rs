//! Contract stub of the hat producer.
//!
//! Serves the real producer router over the contract fixtures instead of the
//! seed catalog, so consumers can be verified without the live producer.
//!
//! # Configuration
//!
//! - `SERVICE_PORT` - HTTP port (default: 8100)
//! - `HATS_CATALOG_PATH` - Not supported; the stub only serves the fixtures
//! - `RUST_LOG` / `LOG_FORMAT` - Logging, as for the producer

use std::net::SocketAddr;

use tracing::{info, warn};

use hats_lib::contract;
use hats_service_producer::router;
use hats_service_shared::{init_logging, AppState, LoggingConfig, MetricsConfig, StubConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::from_env().with_service("stub-producer"));

    let config = StubConfig::from_env();
    if let Some(path) = std::env::var_os("HATS_CATALOG_PATH") {
        warn!(
            path = %path.to_string_lossy(),
            "HATS_CATALOG_PATH is ignored by the stub producer"
        );
    }
    let state = AppState::new(contract::catalog()?, "stub-producer");

    info!(
        port = config.port,
        ids = ?state.catalog().ids(),
        "starting contract stub producer"
    );

    let app = router(state, &MetricsConfig::from_env().path);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

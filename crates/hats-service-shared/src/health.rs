//! Health check handlers for liveness and readiness probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{extract_or_generate_request_id, AppState, ProblemDetails};

/// Route of the liveness probe.
pub const HEALTH_LIVE_ROUTE: &str = "/health/live";

/// Route of the readiness probe.
pub const HEALTH_READY_ROUTE: &str = "/health/ready";

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: always "ok"; failures are reported as problem details.
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of hats in the catalog (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hats_loaded: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            hats_loaded: None,
        }
    }

    /// Create a ready status with catalog information.
    pub fn ready(service: &str, version: &str, hats: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            hats_loaded: Some(hats),
        }
    }
}

/// Liveness probe handler.
///
/// Returns 200 OK if the service is running.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"hats-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Returns 200 OK once the catalog holds at least one hat, otherwise a 503
/// problem response.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"hats-service-shared","version":"0.1.0","hats_loaded":2}
/// ```
pub async fn health_ready(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let hats = state.catalog().len();
    if hats == 0 {
        let request_id = extract_or_generate_request_id(&headers);
        return ProblemDetails::service_unavailable("catalog is empty", request_id.as_str())
            .into_response();
    }

    let status = HealthStatus::ready(service, version, hats);
    (StatusCode::OK, Json(status)).into_response()
}

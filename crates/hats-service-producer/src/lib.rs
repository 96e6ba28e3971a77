//! Hat catalog producer HTTP service.
//!
//! The producer owns a read-only [`hats_lib::Catalog`] and exposes it
//! through a single lookup endpoint.
//!
//! # Endpoints
//!
//! - `GET /api/v1/hats/{id}` - Look up one hat by identifier
//! - `GET /metrics` - Prometheus metrics endpoint (path configurable)
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//!
//! # Status codes
//!
//! | Outcome                  | Status | Body                     |
//! |--------------------------|--------|--------------------------|
//! | hat found                | 200    | `{id, name, size, color}` |
//! | identifier not in catalog | 404    | problem details          |
//! | identifier not an integer | 400    | problem details          |

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use hats_lib::Hat;
use hats_service_shared::{
    extract_or_generate_request_id, health_live, health_ready, metrics_handler,
    record_hat_lookup, AppState, HatPath, MetricsLayer, PathParams, ProblemDetails,
    HATS_ROUTE, HEALTH_LIVE_ROUTE, HEALTH_READY_ROUTE,
};

/// HTTP response - either the hat or an RFC 9457 error.
#[derive(Debug)]
pub enum LookupResponse {
    Found(Hat),
    Error(ProblemDetails),
}

impl IntoResponse for LookupResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            LookupResponse::Found(hat) => (StatusCode::OK, Json(hat)).into_response(),
            LookupResponse::Error(problem) => problem.into_response(),
        }
    }
}

/// Build the producer router.
///
/// Every route is registered here; there is no other routing table.
/// `metrics_path` must come from [`hats_service_shared::MetricsConfig`],
/// which keeps it clear of the other routes.
pub fn router(state: AppState, metrics_path: &str) -> Router {
    Router::new()
        .route(HATS_ROUTE, get(find_hat_handler))
        .route(metrics_path, get(metrics_handler))
        .route(HEALTH_LIVE_ROUTE, get(health_live))
        .route(HEALTH_READY_ROUTE, get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(MetricsLayer)
        .with_state(state)
}

/// Handle GET /api/v1/hats/{id} requests.
pub async fn find_hat_handler(
    State(state): State<AppState>,
    Path(path): Path<HatPath>,
    headers: HeaderMap,
) -> LookupResponse {
    let request_id = extract_or_generate_request_id(&headers);

    let id = match path.parse(request_id.as_str()) {
        Ok(id) => id,
        Err(problem) => {
            info!(request_id = %request_id, raw_id = %path.id, "rejecting malformed hat id");
            record_hat_lookup("invalid", state.service());
            return LookupResponse::Error(*problem);
        }
    };

    match state.catalog().find_by_id(id) {
        Some(hat) => {
            info!(request_id = %request_id, id = id, name = %hat.name, "hat found");
            record_hat_lookup("found", state.service());
            LookupResponse::Found(hat.clone())
        }
        None => {
            info!(request_id = %request_id, id = id, "hat not found");
            record_hat_lookup("not_found", state.service());
            LookupResponse::Error(ProblemDetails::hat_not_found(id, request_id.as_str()))
        }
    }
}

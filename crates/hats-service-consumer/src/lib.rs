//! Hat consumer HTTP service.
//!
//! Calls the producer's lookup endpoint and turns the result into a
//! plain-text greeting.
//!
//! # Endpoints
//!
//! - `GET /api/v1/wearhat/{hatId}` - Greet the caller with the hat's name
//! - `GET /metrics` - Prometheus metrics endpoint (path configurable)
//! - `GET /health/live` - Liveness probe
//!
//! # Failure mapping
//!
//! A 404 from the producer becomes a 404 problem response naming the hat.
//! Any other producer failure becomes a 502 problem response.

#![deny(warnings)]

mod client;
mod error;

pub use client::{greeting, ProducerClient};
pub use error::ProducerError;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use hats_service_shared::{
    extract_or_generate_request_id, health_live, metrics_handler, record_producer_call,
    MetricsLayer, PathParams, ProblemDetails, WearHatPath, HEALTH_LIVE_ROUTE, WEARHAT_ROUTE,
};

/// Shared state for consumer handlers.
#[derive(Debug, Clone)]
pub struct ConsumerState {
    producer: ProducerClient,
}

impl ConsumerState {
    pub fn new(producer: ProducerClient) -> Self {
        Self { producer }
    }

    pub fn producer(&self) -> &ProducerClient {
        &self.producer
    }
}

/// HTTP response - either the greeting or an RFC 9457 error.
#[derive(Debug)]
pub enum WearHatResponse {
    Greeting(String),
    Error(ProblemDetails),
}

impl IntoResponse for WearHatResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            WearHatResponse::Greeting(message) => (StatusCode::OK, message).into_response(),
            WearHatResponse::Error(problem) => problem.into_response(),
        }
    }
}

/// Build the consumer router.
pub fn router(state: ConsumerState, metrics_path: &str) -> Router {
    Router::new()
        .route(WEARHAT_ROUTE, get(wear_hat_handler))
        .route(metrics_path, get(metrics_handler))
        .route(HEALTH_LIVE_ROUTE, get(health_live))
        .layer(TraceLayer::new_for_http())
        .layer(MetricsLayer)
        .with_state(state)
}

/// Handle GET /api/v1/wearhat/{hatId} requests.
pub async fn wear_hat_handler(
    State(state): State<ConsumerState>,
    Path(path): Path<WearHatPath>,
    headers: HeaderMap,
) -> WearHatResponse {
    let request_id = extract_or_generate_request_id(&headers);

    let id = match path.parse(request_id.as_str()) {
        Ok(id) => id,
        Err(problem) => return WearHatResponse::Error(*problem),
    };

    match state.producer.find_hat(id, &request_id).await {
        Ok(hat) => {
            record_producer_call("ok");
            info!(request_id = %request_id, id = id, name = %hat.name, "hat fetched from producer");
            WearHatResponse::Greeting(greeting(&hat))
        }
        Err(ProducerError::HatNotFound { id }) => {
            record_producer_call("not_found");
            info!(request_id = %request_id, id = id, "producer has no such hat");
            WearHatResponse::Error(ProblemDetails::hat_not_found(id, request_id.as_str()))
        }
        Err(e) => {
            record_producer_call(e.outcome());
            warn!(
                request_id = %request_id,
                id = id,
                producer = %state.producer.base_url(),
                error = %e,
                "producer call failed"
            );
            WearHatResponse::Error(ProblemDetails::producer_unavailable(
                e.to_string(),
                request_id.as_str(),
            ))
        }
    }
}

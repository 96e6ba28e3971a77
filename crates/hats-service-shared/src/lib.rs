//! Shared infrastructure for the hat catalog HTTP services.
//!
//! This crate provides common functionality used by the producer and the
//! consumer:
//!
//! - [`AppState`]: The read-only hat catalog shared by producer handlers
//! - [`health`]: Health check handlers for liveness/readiness probes
//! - [`ProblemDetails`]: RFC 9457 Problem Details for consistent error responses
//! - [`config`]: Typed service configuration read from the environment
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request tracking and metrics middleware
//! - Path parameter types with parsing for each endpoint
//!
//! # Architecture
//!
//! The services follow a thin-handler pattern where the catalog and the hat
//! model live in `hats-lib`. This crate provides only HTTP glue:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Extract path parameters                                  │
//! │  - Parse the hat identifier                                 │
//! │  - Call hats-lib / the producer                             │
//! │  - Map the outcome to a status code                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides fixture state and a helper that serves
//! a router on an ephemeral port. Enable the `test-utils` feature to access
//! it from dependent crates.

#![deny(warnings)]

pub mod config;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConsumerConfig, ProducerConfig, StubConfig};
pub use health::{health_live, health_ready, HealthStatus, HEALTH_LIVE_ROUTE, HEALTH_READY_ROUTE};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_hat_lookup, record_producer_call, MetricsConfig,
    MetricsError, DEFAULT_METRICS_PATH,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId, REQUEST_ID_HEADER};
pub use problem::{
    ProblemDetails, PROBLEM_HAT_NOT_FOUND, PROBLEM_INVALID_REQUEST, PROBLEM_PRODUCER_UNAVAILABLE,
    PROBLEM_SERVICE_UNAVAILABLE,
};
pub use request::{HatPath, PathParams, WearHatPath, HATS_ROUTE, WEARHAT_ROUTE};
pub use state::{AppState, AppStateError, DEFAULT_SERVICE_NAME};

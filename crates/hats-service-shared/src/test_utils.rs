//! Test utilities for service handler testing.
//!
//! This module provides fixture state for the live and contract catalogs
//! and a helper that serves a router over real HTTP on an ephemeral port.

use std::net::SocketAddr;

use axum::Router;
use hats_lib::contract;
use tokio::net::TcpListener;

use crate::state::AppState;

/// State backed by the seed catalog.
pub fn test_state() -> AppState {
    AppState::seeded()
}

/// State backed by the contract fixtures served by the stub producer.
///
/// # Panics
///
/// Panics if the contract fixtures fail validation, which indicates a broken
/// fixture definition.
pub fn contract_state() -> AppState {
    let catalog = contract::catalog()
        .unwrap_or_else(|e| panic!("contract fixtures are invalid: {}", e));
    AppState::new(catalog, "stub-producer")
}

/// Serve `router` on `127.0.0.1` with an OS-assigned port.
///
/// The server runs on a background task for the rest of the test runtime.
///
/// # Panics
///
/// Panics if no local port can be bound.
pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap_or_else(|e| panic!("failed to bind test listener: {}", e));
    let addr = listener
        .local_addr()
        .unwrap_or_else(|e| panic!("test listener has no address: {}", e));

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!(error = %e, "test server stopped");
        }
    });

    addr
}

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    format!("test-{}", uuid::Uuid::now_v7())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use hats_lib::Hat;

    #[test]
    fn test_state_is_seeded() {
        let state = test_state();
        assert_eq!(
            state.catalog().find_by_id(1),
            Some(&Hat::new(1, "Sombrero", 30, "red"))
        );
    }

    #[test]
    fn test_contract_state_serves_fixtures() {
        let state = contract_state();
        assert_eq!(state.catalog().ids(), vec![1, 2]);
        assert!(state
            .catalog()
            .find_by_id(contract::MISSING_HAT_ID)
            .is_none());
    }

    #[test]
    fn test_request_id_unique() {
        assert_ne!(test_request_id(), test_request_id());
    }

    #[tokio::test]
    async fn test_spawn_router_accepts_connections() {
        let addr = spawn_router(Router::new().route("/ping", get(|| async { "pong" }))).await;

        let stream = tokio::net::TcpStream::connect(addr).await;
        assert!(stream.is_ok());
    }
}

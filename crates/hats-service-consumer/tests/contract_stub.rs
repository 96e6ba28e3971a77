//! Consumer-side contract tests.
//!
//! The consumer is exercised against the stub producer, which serves the
//! contract fixtures over real HTTP on an ephemeral port.

use std::time::Duration;

use hats_lib::contract::MISSING_HAT_ID;
use hats_lib::Hat;
use hats_service_consumer::{ProducerClient, ProducerError};
use hats_service_shared::test_utils::{contract_state, spawn_router, test_request_id};
use hats_service_shared::RequestId;

fn request_id() -> RequestId {
    RequestId(test_request_id())
}

async fn stub_client() -> ProducerClient {
    let addr = spawn_router(hats_service_producer::router(contract_state(), "/metrics")).await;
    ProducerClient::new(format!("http://{}", addr), Duration::from_secs(5))
        .expect("client should build")
}

#[tokio::test]
async fn get_hat1() {
    let hat = stub_client().await.find_hat(1, &request_id()).await.expect("hat 1 exists");

    assert_eq!(hat.id, 1);
    assert_eq!(hat.name, "Test Hat 1");
    assert_eq!(hat.size, 10);
    assert_eq!(hat.color, "striped");
}

#[tokio::test]
async fn get_hat2() {
    let hat = stub_client().await.find_hat(2, &request_id()).await.expect("hat 2 exists");

    assert_eq!(hat, Hat::new(2, "Test Hat 2", 7, "green"));
}

#[tokio::test]
async fn get_hat3() {
    let err = stub_client()
        .await
        .find_hat(MISSING_HAT_ID, &request_id())
        .await
        .expect_err("hat 3 is absent");

    match err {
        ProducerError::HatNotFound { id } => assert_eq!(id, MISSING_HAT_ID),
        other => panic!("unexpected error: {:?}", other),
    }
}

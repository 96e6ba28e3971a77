use std::time::Duration;

use axum::{
    extract::Path,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use axum_test::TestServer;

use hats_lib::Hat;
use hats_service_consumer::{router, ConsumerState, ProducerClient};
use hats_service_shared::test_utils::{contract_state, spawn_router, test_state};
use hats_service_shared::{
    RequestId, ProblemDetails, PROBLEM_HAT_NOT_FOUND, PROBLEM_INVALID_REQUEST,
    PROBLEM_PRODUCER_UNAVAILABLE, REQUEST_ID_HEADER,
};

fn consumer_for(base_url: String) -> TestServer {
    let producer =
        ProducerClient::new(base_url, Duration::from_secs(5)).expect("client should build");
    TestServer::new(router(ConsumerState::new(producer), "/metrics")).expect("router should build")
}

async fn consumer_against_stub() -> TestServer {
    let addr = spawn_router(hats_service_producer::router(contract_state(), "/metrics")).await;
    consumer_for(format!("http://{}", addr))
}

#[tokio::test]
async fn greets_with_stub_hat_name() {
    let consumer = consumer_against_stub().await;

    let response = consumer.get("/api/v1/wearhat/1").await;
    response.assert_status_ok();
    response.assert_text("Enjoy your new Test Hat 1");

    consumer
        .get("/api/v1/wearhat/2")
        .await
        .assert_text("Enjoy your new Test Hat 2");
}

#[tokio::test]
async fn greets_with_live_producer_seed_data() {
    let addr = spawn_router(hats_service_producer::router(test_state(), "/metrics")).await;
    let consumer = consumer_for(format!("http://{}", addr));

    let response = consumer.get("/api/v1/wearhat/1").await;
    response.assert_status_ok();
    response.assert_text("Enjoy your new Sombrero");
}

#[tokio::test]
async fn missing_hat_propagates_not_found() {
    let consumer = consumer_against_stub().await;

    let response = consumer.get("/api/v1/wearhat/3").await;
    response.assert_status_not_found();
    let problem: ProblemDetails = response.json();
    assert_eq!(problem.type_uri, PROBLEM_HAT_NOT_FOUND);
    assert_eq!(problem.detail.as_deref(), Some("Hat 3 not found"));
}

#[tokio::test]
async fn malformed_hat_id_is_bad_request() {
    let consumer = consumer_against_stub().await;

    let response = consumer.get("/api/v1/wearhat/sombrero").await;
    response.assert_status_bad_request();
    let problem: ProblemDetails = response.json();
    assert_eq!(problem.type_uri, PROBLEM_INVALID_REQUEST);
}

#[tokio::test]
async fn unreachable_producer_is_bad_gateway() {
    // Bind then release a port so nothing is listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let consumer = consumer_for(format!("http://{}", addr));

    let response = consumer.get("/api/v1/wearhat/1").await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    let problem: ProblemDetails = response.json();
    assert_eq!(problem.type_uri, PROBLEM_PRODUCER_UNAVAILABLE);
}

#[tokio::test]
async fn producer_server_error_is_bad_gateway() {
    let failing = Router::new().route(
        "/api/v1/hats/{id}",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let addr = spawn_router(failing).await;
    let consumer = consumer_for(format!("http://{}", addr));

    let response = consumer.get("/api/v1/wearhat/1").await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    let problem: ProblemDetails = response.json();
    assert!(problem.detail.as_deref().unwrap().contains("500"));
}

#[tokio::test]
async fn undecodable_producer_body_is_bad_gateway() {
    let garbled = Router::new().route("/api/v1/hats/{id}", get(|| async { "not a hat" }));
    let addr = spawn_router(garbled).await;
    let consumer = consumer_for(format!("http://{}", addr));

    consumer
        .get("/api/v1/wearhat/1")
        .await
        .assert_status(StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn liveness_probe_does_not_call_producer() {
    let consumer = consumer_for("http://127.0.0.1:9".to_string());
    consumer.get("/health/live").await.assert_status_ok();
}

/// Producer double that names every hat after the request ID it received.
async fn request_id_echo(Path(id): Path<i64>, headers: HeaderMap) -> Json<Hat> {
    let received = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("none")
        .to_string();
    Json(Hat::new(id, received, 1, "plain"))
}

#[tokio::test]
async fn client_sends_request_id_to_producer() {
    let addr = spawn_router(Router::new().route("/api/v1/hats/{id}", get(request_id_echo))).await;
    let client = ProducerClient::new(format!("http://{}", addr), Duration::from_secs(5)).unwrap();

    let hat = client
        .find_hat(4, &RequestId::from("corr-client"))
        .await
        .expect("echo producer answers");

    assert_eq!(hat.id, 4);
    assert_eq!(hat.name, "corr-client");
}

#[tokio::test]
async fn incoming_request_id_reaches_producer() {
    let addr = spawn_router(Router::new().route("/api/v1/hats/{id}", get(request_id_echo))).await;
    let consumer = consumer_for(format!("http://{}", addr));

    let response = consumer
        .get("/api/v1/wearhat/1")
        .add_header(
            HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderValue::from_static("corr-e2e"),
        )
        .await;

    response.assert_status_ok();
    response.assert_text("Enjoy your new corr-e2e");
}

use super::helpers::TestApp;
use axum::http::StatusCode;

#[tokio::test]
async fn it_should_answer_liveness_probe() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn it_should_report_ready_with_language_count() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/health/ready").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["languages"], 4);
}

#[tokio::test]
async fn it_should_attach_request_id_to_responses() {
    let app = TestApp::spawn().await;

    let response = app.client.get("/health").await;

    let request_id = response.header("x-request-id").expect("x-request-id header");
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn it_should_echo_client_request_id() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get_with_headers("/api/languages", &[("x-request-id", "trace-abc-123")])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header("x-request-id"), Some("trace-abc-123"));
}

use crate::e2e::helpers;

use helpers::{spawn_app, test_config, TestContext};
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ready_status(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    for service in ["youtube", "transcripts", "llm", "oauth"] {
        assert_eq!(
            body.get(service).and_then(|v| v.as_str()),
            Some("configured"),
            "Unexpected status for '{}'",
            service
        );
    }
}

#[tokio::test]
async fn it_should_report_oauth_disabled_without_credentials() {
    let mut config = test_config("http://127.0.0.1:1");
    config.google_refresh_token = None;
    let client = spawn_app(config).await;

    let response = client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("oauth").and_then(|v| v.as_str()), Some("disabled"));
}

#[tokio::test]
async fn it_should_not_be_ready_without_llm_key() {
    let mut config = test_config("http://127.0.0.1:1");
    config.llm_api_key = String::new();
    let client = spawn_app(config).await;

    let response = client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("not_ready"));
    assert_eq!(body.get("llm").and_then(|v| v.as_str()), Some("missing"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/health/ready").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_propagate_incoming_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_header("/health", "x-request-id", "digest-run-42")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.header("x-request-id").map(String::as_str),
        Some("digest-run-42")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_replace_malformed_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_header("/health", "x-request-id", "not a valid id")
        .await
        .unwrap();

    let request_id = response.header("x-request-id").expect("Missing request id");
    assert_ne!(request_id, "not a valid id");
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}

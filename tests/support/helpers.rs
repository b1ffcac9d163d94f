// tests/support/helpers.rs
use super::mocks::InMemoryNewsRepo;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use news_service::application::services::ApplicationServices;
use news_service::infrastructure::security::token::StaticTokenVerifier;
use news_service::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_TOKEN: &str = "test-token";

pub fn build_test_state(repo: Arc<InMemoryNewsRepo>) -> HttpState {
    let services = Arc::new(ApplicationServices::new(
        repo.clone(),
        repo,
        Arc::new(StaticTokenVerifier::new(TEST_TOKEN)),
    ));
    HttpState { services }
}

pub fn make_test_router(repo: Arc<InMemoryNewsRepo>) -> axum::Router {
    build_router(build_test_state(repo))
}

/// Authorized request with an optional JSON body.
pub fn authed(method: Method, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TEST_TOKEN}"));
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_owned()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert the response is the standard error envelope with the given message.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_owned();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = json_body(resp).await;
    assert_eq!(json["Success"], Value::Bool(false), "body: {json}");
    assert_eq!(json["Error"], expected_error, "body: {json}");
}

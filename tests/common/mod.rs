//! Shared helpers for the WireMock integration tests.

#![allow(dead_code)]

use integrations_webex::{RetryConfig, WebexClient};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-token";

/// Starts a mock server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// API base URL on the mock server, mirroring the `/v1` prefix.
pub fn base_url(server: &MockServer) -> String {
    format!("{}/v1", server.uri())
}

/// Client pointed at the mock server with a short retry padding.
pub fn client_for(server: &MockServer) -> WebexClient {
    WebexClient::builder()
        .base_url(base_url(server))
        .token(TOKEN)
        .retry(RetryConfig {
            padding: Duration::from_millis(10),
            ..RetryConfig::default()
        })
        .build()
        .expect("client should build")
}

/// Mock expecting the bearer token on `method path`.
pub fn mock_with_auth(method_matcher: &str, path_matcher: &str) -> MockBuilder {
    Mock::given(method(method_matcher))
        .and(path(format!("/v1/{}", path_matcher.trim_start_matches('/'))))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
}

/// Successful JSON response.
pub fn success_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Error response with a JSON body.
pub fn error_response(status: u16, body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

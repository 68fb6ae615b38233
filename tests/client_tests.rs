//! Integration tests for the request pipeline: auth, errors, retries.

mod common;

use common::*;
use integrations_webex::{
    ListPeopleParams, ListRoomsParams, RoomType, WebexClient, WebexErrorKind,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header_exists, method};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_room_sends_auth_and_tracking_headers() {
    let server = setup_mock_server().await;

    mock_with_auth("GET", "rooms/r1")
        .and(header_exists("TrackingID"))
        .and(header_exists("User-Agent"))
        .respond_with(success_response(json!({
            "id": "r1",
            "title": "Project Unicorn",
            "type": "group",
            "isLocked": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let room = client.rooms().get("r1").await.unwrap();

    assert_eq!(room.title.as_deref(), Some("Project Unicorn"));
    assert_eq!(room.room_type, Some(RoomType::Group));
    assert_eq!(client.metrics().requests_success, 1);
}

#[tokio::test]
async fn test_not_found_becomes_api_error() {
    let server = setup_mock_server().await;

    mock_with_auth("GET", "rooms/missing")
        .respond_with(error_response(
            404,
            json!({"message": "Not found", "trackingId": "X"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).rooms().get("missing").await.unwrap_err();

    assert_eq!(err.kind(), WebexErrorKind::Api);
    assert_eq!(err.message(), "Not found");
    assert_eq!(err.tracking_id(), Some("X"));
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.request_path(), Some("rooms/missing"));
    assert_eq!(err.object_type(), Some("Room"));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_opaque_error_body_is_kept() {
    let server = setup_mock_server().await;

    mock_with_auth("GET", "people/me")
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).people().me().await.unwrap_err();

    assert_eq!(err.kind(), WebexErrorKind::Api);
    assert_eq!(err.message(), "Bad Gateway");
    assert_eq!(err.response_body(), Some("Bad Gateway"));
}

#[tokio::test]
async fn test_server_errors_are_not_retried() {
    let server = setup_mock_server().await;

    mock_with_auth("GET", "rooms")
        .respond_with(error_response(500, json!({"message": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .rooms()
        .list(&ListRoomsParams::new())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn test_truncated_error_body_keeps_read_failure_as_cause() {
    use std::error::Error as _;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await.unwrap();
        socket
            .write_all(
                b"HTTP/1.1 500 Internal Server Error\r\n\
                  Content-Type: application/json\r\n\
                  Content-Length: 100\r\n\r\n{\"mess",
            )
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let client = WebexClient::builder()
        .base_url(format!("http://{}/v1", addr))
        .token(TOKEN)
        .build()
        .unwrap();
    let err = client.rooms().get("r1").await.unwrap_err();

    assert_eq!(err.kind(), WebexErrorKind::Api);
    assert_eq!(err.status_code(), Some(500));
    assert!(err.source().is_some());
    server.await.unwrap();
}

#[tokio::test]
async fn test_rate_limit_then_success() {
    let server = setup_mock_server().await;

    mock_with_auth("GET", "rooms/r1")
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    mock_with_auth("GET", "rooms/r1")
        .respond_with(success_response(json!({"id": "r1", "title": "Ops"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let room = client.rooms().get("r1").await.unwrap();

    assert_eq!(room.id, "r1");
    let metrics = client.metrics();
    assert_eq!(metrics.requests_total, 2);
    assert_eq!(metrics.requests_rate_limited, 1);
}

#[tokio::test]
async fn test_rate_limit_exhausted_after_three_attempts() {
    let server = setup_mock_server().await;

    mock_with_auth("GET", "rooms/r1")
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .expect(3)
        .mount(&server)
        .await;

    let err = client_for(&server).rooms().get("r1").await.unwrap_err();

    assert_eq!(err.kind(), WebexErrorKind::RateLimitExceeded);
    assert_eq!(err.status_code(), Some(429));
    assert_eq!(err.retry_after(), Some(0));
}

#[tokio::test]
async fn test_missing_token_makes_no_request() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .respond_with(success_response(json!({"items": []})))
        .expect(0)
        .mount(&server)
        .await;

    let client = WebexClient::builder()
        .base_url(base_url(&server))
        .build()
        .unwrap();
    let err = client.rooms().list(&ListRoomsParams::new()).await.unwrap_err();

    assert_eq!(err.kind(), WebexErrorKind::MissingToken);
}

#[tokio::test]
async fn test_too_many_person_ids_fail_before_io() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .respond_with(success_response(json!({"items": []})))
        .expect(0)
        .mount(&server)
        .await;

    let ids: Vec<String> = (0..86).map(|i| format!("person-{}", i)).collect();
    let err = client_for(&server)
        .people()
        .list(&ListPeopleParams::new().ids(ids))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), WebexErrorKind::OutOfRange);
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = setup_mock_server().await;

    mock_with_auth("GET", "teams/t1")
        .respond_with(ResponseTemplate::new(200).set_body_string("{oops"))
        .mount(&server)
        .await;

    let err = client_for(&server).teams().get("t1").await.unwrap_err();
    assert_eq!(err.kind(), WebexErrorKind::Decode);
    assert_eq!(err.object_type(), Some("Team"));
}

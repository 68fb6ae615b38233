//! Integration tests for resource operations and entity-scoped calls.

mod common;

use common::*;
use integrations_webex::{
    CreateWebhook, MessageBuilder, PersonBuilder, WebhookEventType, WebhookNotification,
    WebhookResource, WebexErrorKind,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use wiremock::matchers::{body_json, body_string_contains, header_exists, method};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_send_message_as_json() {
    let server = setup_mock_server().await;

    mock_with_auth("POST", "messages")
        .and(body_json(json!({"roomId": "r1", "markdown": "**deploy** done"})))
        .respond_with(success_response(json!({
            "id": "m1",
            "roomId": "r1",
            "markdown": "**deploy** done",
            "created": "2024-01-01T00:00:00.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let message = MessageBuilder::new()
        .room_id("r1")
        .markdown("**deploy** done")
        .build()
        .unwrap();
    let sent = client_for(&server).messages().create(&message).await.unwrap();

    assert_eq!(sent.id, "m1");
}

#[tokio::test]
async fn test_send_local_file_as_multipart() {
    let server = setup_mock_server().await;
    let mut file = tempfile::Builder::new()
        .prefix("report")
        .suffix(".txt")
        .tempfile()
        .unwrap();
    file.write_all(b"quarterly numbers").unwrap();

    mock_with_auth("POST", "messages")
        .and(body_string_contains("quarterly numbers"))
        .and(body_string_contains("name=\"roomId\""))
        .and(header_exists("content-length"))
        .respond_with(success_response(json!({"id": "m2", "roomId": "r1"})))
        .expect(1)
        .mount(&server)
        .await;

    let message = MessageBuilder::new()
        .room_id("r1")
        .text("see attached")
        .file(file.path().to_string_lossy())
        .build()
        .unwrap();
    let sent = client_for(&server).messages().create(&message).await.unwrap();
    assert_eq!(sent.id, "m2");

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("filename=\"report"));
    assert!(body.contains("text/plain"));
}

#[tokio::test]
async fn test_reply_and_delete_through_entity() {
    let server = setup_mock_server().await;

    mock_with_auth("GET", "messages/m1")
        .respond_with(success_response(json!({"id": "m1", "roomId": "r1", "text": "hi"})))
        .mount(&server)
        .await;

    mock_with_auth("POST", "messages")
        .and(body_json(json!({"roomId": "r1", "text": "hello back", "parentId": "m1"})))
        .respond_with(success_response(json!({"id": "m2", "roomId": "r1", "parentId": "m1"})))
        .expect(1)
        .mount(&server)
        .await;

    mock_with_auth("DELETE", "messages/m1")
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let message = client_for(&server).messages().get("m1").await.unwrap();

    let reply = message.reply("hello back").await.unwrap();
    assert_eq!(reply.parent_id.as_deref(), Some("m1"));

    let deleted = message.delete().await.unwrap();
    assert!(deleted.is_ok());
    assert_eq!(deleted.status_code, 204);
}

#[tokio::test]
async fn test_room_memberships_from_entity() {
    let server = setup_mock_server().await;

    mock_with_auth("GET", "rooms/r1")
        .respond_with(success_response(json!({"id": "r1", "title": "Ops"})))
        .mount(&server)
        .await;

    mock_with_auth("GET", "memberships")
        .and(wiremock::matchers::query_param("roomId", "r1"))
        .respond_with(success_response(json!({
            "items": [{"id": "mem1", "roomId": "r1", "personEmail": "a@example.com", "isModerator": true}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let room = client_for(&server).rooms().get("r1").await.unwrap();
    let memberships = room.memberships().await.unwrap();

    assert_eq!(memberships.len(), 1);
    assert!(memberships.items[0].is_moderator);
}

#[tokio::test]
async fn test_create_person_body() {
    let server = setup_mock_server().await;

    mock_with_auth("POST", "people")
        .and(body_json(json!({
            "emails": ["john@example.com"],
            "displayName": "John Andersen",
            "licenses": ["l1"]
        })))
        .respond_with(success_response(json!({
            "id": "p1",
            "emails": ["john@example.com"],
            "displayName": "John Andersen",
            "phoneNumbers": [{"type": "work", "value": "+1 408 526 7209"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = PersonBuilder::new()
        .email("john@example.com")
        .display_name("John Andersen")
        .license("l1")
        .build()
        .unwrap();
    let person = client_for(&server).people().create(&request).await.unwrap();

    assert_eq!(person.phones().len(), 1);
    assert_eq!(person.phones()[0].number(), "+1 408 526 7209");
}

#[tokio::test]
async fn test_webhook_validation_precedes_io() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(success_response(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let request = CreateWebhook::new(
        "",
        "https://example.com/hook",
        WebhookResource::Messages,
        WebhookEventType::Created,
    );
    let err = client_for(&server)
        .webhooks()
        .create(&request)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), WebexErrorKind::ValidationFailed);
}

#[tokio::test]
async fn test_notification_fetches_message() {
    let server = setup_mock_server().await;

    mock_with_auth("GET", "messages/msg1")
        .respond_with(success_response(json!({"id": "msg1", "roomId": "r1", "text": "PROJECT UPDATE"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = br#"{"id": "wh1", "resource": "messages", "event": "created", "actorId": "p2", "data": {"id": "msg1", "roomId": "r1"}}"#;
    let notification = WebhookNotification::from_slice(payload, Some(&client)).unwrap();

    let message = notification.fetch_message().await.unwrap();
    assert_eq!(message.text.as_deref(), Some("PROJECT UPDATE"));
}

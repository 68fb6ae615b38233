//! Webhook registrations.

use super::{ListError, ResponseMessage};
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::WebexResult;
use crate::query::QueryValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resource a webhook watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WebhookResource {
    /// Every resource.
    All,
    /// Room memberships.
    Memberships,
    /// Messages.
    Messages,
    /// Rooms.
    Rooms,
    /// Card submissions.
    AttachmentActions,
    /// Meetings.
    Meetings,
    /// Meeting recordings.
    Recordings,
    /// Resource added after this client was built.
    #[serde(other)]
    Unknown,
}

/// Event a webhook fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WebhookEventType {
    /// Every event.
    All,
    /// Resource created.
    Created,
    /// Resource updated.
    Updated,
    /// Resource deleted.
    Deleted,
    /// Meeting started.
    Started,
    /// Meeting ended.
    Ended,
    /// Participant joined.
    Joined,
    /// Participant left.
    Left,
    /// Event added after this client was built.
    #[serde(other)]
    Unknown,
}

/// Delivery status of a webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookStatus {
    /// Deliveries are attempted.
    Active,
    /// Deliveries are paused.
    Inactive,
    /// Status added after this client was built.
    #[serde(other)]
    Unknown,
}

impl QueryValue for WebhookStatus {
    fn query_value(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Unknown => "unknown",
        }
    }
}

/// A registered webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Webhook ID.
    pub id: String,
    /// Display name.
    pub name: Option<String>,
    /// URL receiving notifications.
    pub target_url: Option<String>,
    /// Watched resource.
    pub resource: Option<WebhookResource>,
    /// Watched event.
    pub event: Option<WebhookEventType>,
    /// Filter expression, e.g. `roomId=...`.
    pub filter: Option<String>,
    /// Secret used to sign notifications.
    pub secret: Option<String>,
    /// Delivery status.
    pub status: Option<WebhookStatus>,
    /// Organization ID.
    pub org_id: Option<String>,
    /// Creator person ID.
    pub created_by: Option<String>,
    /// Application ID.
    pub app_id: Option<String>,
    /// `creator` or `org`.
    pub owned_by: Option<String>,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(Webhook);

impl Webhook {
    /// Deletes this webhook.
    pub async fn delete(&self) -> WebexResult<ResponseMessage> {
        self.bound_client()?.webhooks().delete(&self.id).await
    }

    /// Re-reads this webhook from the server.
    pub async fn refresh(&self) -> WebexResult<Webhook> {
        self.bound_client()?.webhooks().get(&self.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_deserialize() {
        let webhook: Webhook = serde_json::from_str(
            r#"{
                "id": "wh1",
                "name": "My Awesome Webhook",
                "targetUrl": "https://example.com/mywebhook",
                "resource": "messages",
                "event": "created",
                "filter": "roomId=r1",
                "status": "active",
                "created": "2015-10-18T14:26:16.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(webhook.resource, Some(WebhookResource::Messages));
        assert_eq!(webhook.event, Some(WebhookEventType::Created));
        assert_eq!(webhook.status, Some(WebhookStatus::Active));
    }

    #[test]
    fn test_unknown_resource_is_tolerated() {
        let webhook: Webhook =
            serde_json::from_str(r#"{"id": "wh1", "resource": "telephony_calls"}"#).unwrap();
        assert_eq!(webhook.resource, Some(WebhookResource::Unknown));
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let webhook: Webhook =
            serde_json::from_str(r#"{"id": "wh1", "status": "disabled"}"#).unwrap();
        assert_eq!(webhook.status, Some(WebhookStatus::Unknown));
    }

    #[test]
    fn test_resource_serializes_camel_case() {
        let json = serde_json::to_string(&WebhookResource::AttachmentActions).unwrap();
        assert_eq!(json, r#""attachmentActions""#);
    }
}

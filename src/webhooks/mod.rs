//! Inbound webhook notifications with signature verification.

use crate::client::WebexClient;
use crate::decode::{decode_entity, ApiEntity};
use crate::errors::{WebexError, WebexErrorKind, WebexResult};
use crate::types::{Message, WebhookEventType, WebhookResource, WebhookStatus};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Header carrying the hex HMAC-SHA1 of the notification body.
pub const SIGNATURE_HEADER: &str = "X-Spark-Signature";

/// Verifies notifications against the secret given at webhook creation.
#[derive(Debug, Clone)]
pub struct WebhookVerifier {
    secret: SecretString,
}

impl WebhookVerifier {
    /// Creates a verifier for a webhook secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
        }
    }

    /// Checks the `X-Spark-Signature` value against the raw body.
    ///
    /// Comparison is constant-time.
    pub fn verify(&self, signature: &str, payload: &[u8]) -> WebexResult<()> {
        let expected = hex::decode(signature.trim()).map_err(|e| {
            WebexError::new(
                WebexErrorKind::WebhookSignatureInvalid,
                format!("Invalid signature hex encoding: {}", e),
            )
        })?;

        let mut mac = self.mac()?;
        mac.update(payload);
        mac.verify_slice(&expected).map_err(|_| {
            WebexError::new(
                WebexErrorKind::WebhookSignatureInvalid,
                "Signature verification failed",
            )
        })
    }

    /// Verifies the signature, then parses the notification.
    pub fn verify_and_parse(
        &self,
        signature: &str,
        payload: &[u8],
        client: Option<&WebexClient>,
    ) -> WebexResult<WebhookNotification> {
        self.verify(signature, payload)?;
        WebhookNotification::from_slice(payload, client)
    }

    /// Computes the signature the server would send for a body.
    pub fn sign(&self, payload: &[u8]) -> WebexResult<String> {
        let mut mac = self.mac()?;
        mac.update(payload);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    fn mac(&self) -> WebexResult<HmacSha1> {
        HmacSha1::new_from_slice(self.secret.expose_secret().as_bytes()).map_err(|e| {
            WebexError::new(
                WebexErrorKind::WebhookSignatureInvalid,
                format!("Failed to create HMAC: {}", e),
            )
        })
    }
}

/// Notification POSTed to a webhook's target URL.
///
/// `data` holds the affected resource; for messages it carries IDs only and
/// the content must be fetched with [`WebhookNotification::fetch_message`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookNotification {
    /// Webhook ID.
    pub id: String,
    /// Webhook name.
    pub name: Option<String>,
    /// Target URL the notification was sent to.
    pub target_url: Option<String>,
    /// Resource that changed.
    pub resource: Option<WebhookResource>,
    /// Kind of change.
    pub event: Option<WebhookEventType>,
    /// Webhook filter.
    pub filter: Option<String>,
    /// Organization ID.
    pub org_id: Option<String>,
    /// Webhook creator.
    pub created_by: Option<String>,
    /// Application ID.
    pub app_id: Option<String>,
    /// `creator` or `org`.
    pub owned_by: Option<String>,
    /// Webhook status.
    pub status: Option<WebhookStatus>,
    /// Person who caused the change.
    pub actor_id: Option<String>,
    /// Webhook creation time.
    pub created: Option<DateTime<Utc>>,
    /// The affected resource.
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(skip)]
    client: Option<WebexClient>,
}

impl WebhookNotification {
    /// Parses a notification body, keeping the client for follow-up calls.
    pub fn from_slice(payload: &[u8], client: Option<&WebexClient>) -> WebexResult<Self> {
        let mut notification: Self = serde_json::from_slice(payload).map_err(|e| {
            WebexError::decode(format!("Failed to parse webhook notification: {}", e))
                .with_cause(e)
        })?;
        notification.client = client.cloned();
        Ok(notification)
    }

    /// Decodes `data` as an entity, attaching the client.
    pub fn data_as<T: ApiEntity>(&self) -> WebexResult<T> {
        let body = serde_json::to_vec(&self.data).map_err(|e| {
            WebexError::decode(format!("Failed to re-encode notification data: {}", e))
        })?;
        decode_entity(&body, self.client.as_ref())
    }

    /// ID of the affected resource.
    pub fn data_id(&self) -> Option<&str> {
        self.data.get("id").and_then(|v| v.as_str())
    }

    /// Fetches the full message a `messages` notification refers to.
    pub async fn fetch_message(&self) -> WebexResult<Message> {
        if self.resource != Some(WebhookResource::Messages) {
            return Err(WebexError::validation(
                "Notification does not refer to a message",
            ));
        }
        let message_id = self
            .data_id()
            .ok_or_else(|| WebexError::decode("Notification data has no message ID"))?;
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| WebexError::unbound("WebhookNotification"))?;
        client.messages().get(message_id).await
    }
}

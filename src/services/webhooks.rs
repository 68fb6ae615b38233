//! Webhook operations.

use super::with_max;
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::{WebexError, WebexResult};
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::types::{ResponseMessage, Webhook, WebhookEventType, WebhookResource, WebhookStatus};
use serde::Serialize;

/// Service for webhook operations.
pub struct WebhooksService<'a> {
    client: &'a WebexClient,
}

impl<'a> WebhooksService<'a> {
    /// Creates a new webhooks service.
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Lists the caller's webhooks.
    pub async fn list(&self, max: Option<u32>) -> WebexResult<Page<Webhook>> {
        let path = with_max(QueryBuilder::new("webhooks"), max).build()?;
        self.client.get_page(&path).await
    }

    /// Gets a webhook.
    pub async fn get(&self, webhook_id: &str) -> WebexResult<Webhook> {
        self.client
            .get_entity(&format!("webhooks/{}", webhook_id))
            .await
    }

    /// Registers a webhook.
    pub async fn create(&self, request: &CreateWebhook) -> WebexResult<Webhook> {
        require_name_and_target(&request.name, &request.target_url)?;
        self.client.post_entity("webhooks", request).await
    }

    /// Updates a webhook's name, target, secret or status.
    pub async fn update(&self, webhook_id: &str, request: &UpdateWebhook) -> WebexResult<Webhook> {
        require_name_and_target(&request.name, &request.target_url)?;
        self.client
            .put_entity(&format!("webhooks/{}", webhook_id), request)
            .await
    }

    /// Deletes a webhook.
    pub async fn delete(&self, webhook_id: &str) -> WebexResult<ResponseMessage> {
        self.client
            .delete(&format!("webhooks/{}", webhook_id), Webhook::OBJECT_TYPE)
            .await
    }
}

fn require_name_and_target(name: &str, target_url: &str) -> WebexResult<()> {
    if name.trim().is_empty() {
        return Err(WebexError::validation("Webhook name is required"));
    }
    if target_url.trim().is_empty() {
        return Err(WebexError::validation("Webhook target URL is required"));
    }
    Ok(())
}

/// Body of a register-webhook call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhook {
    /// Display name.
    pub name: String,
    /// URL receiving notifications.
    pub target_url: String,
    /// Watched resource.
    pub resource: WebhookResource,
    /// Watched event.
    pub event: WebhookEventType,
    /// Filter expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Signing secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// `org` to receive organization-wide events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
}

impl CreateWebhook {
    /// Creates a webhook request.
    pub fn new(
        name: impl Into<String>,
        target_url: impl Into<String>,
        resource: WebhookResource,
        event: WebhookEventType,
    ) -> Self {
        Self {
            name: name.into(),
            target_url: target_url.into(),
            resource,
            event,
            filter: None,
            secret: None,
            owned_by: None,
        }
    }

    /// Sets the filter expression.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the signing secret.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

/// Body of an update-webhook call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhook {
    /// Display name.
    pub name: String,
    /// URL receiving notifications.
    pub target_url: String,
    /// Signing secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Reactivates or pauses deliveries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WebhookStatus>,
}

impl UpdateWebhook {
    /// Creates an update request.
    pub fn new(name: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_url: target_url.into(),
            secret: None,
            status: None,
        }
    }

    /// Sets the status.
    pub fn status(mut self, status: WebhookStatus) -> Self {
        self.status = Some(status);
        self
    }
}

//! Compliance events.

use super::ListError;
use crate::client::WebexClient;
use crate::query::QueryValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resource an event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventResource {
    /// Messages.
    Messages,
    /// Room memberships.
    Memberships,
    /// Resource added after this client was built.
    #[serde(other)]
    Unknown,
}

impl QueryValue for EventResource {
    fn query_value(&self) -> &'static str {
        match self {
            Self::Messages => "messages",
            Self::Memberships => "memberships",
            Self::Unknown => "unknown",
        }
    }
}

/// Kind of change an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventType {
    /// Resource created.
    Created,
    /// Resource updated.
    Updated,
    /// Resource deleted.
    Deleted,
    /// Type added after this client was built.
    #[serde(other)]
    Unknown,
}

impl QueryValue for EventType {
    fn query_value(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::Unknown => "unknown",
        }
    }
}

/// An activity event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event ID.
    pub id: String,
    /// Resource type.
    pub resource: Option<EventResource>,
    /// Change type.
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    /// Application that caused the event.
    pub app_id: Option<String>,
    /// Person that caused the event.
    pub actor_id: Option<String>,
    /// Organization ID.
    pub org_id: Option<String>,
    /// Event time.
    pub created: Option<DateTime<Utc>>,
    /// Snapshot of the resource at the time of the event.
    #[serde(default)]
    pub data: serde_json::Value,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(Event);

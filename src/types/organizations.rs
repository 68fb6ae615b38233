//! Organizations.

use super::ListError;
use crate::client::WebexClient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Webex organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization ID.
    pub id: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(Organization);

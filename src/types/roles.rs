//! Administrative roles.

use super::ListError;
use crate::client::WebexClient;
use serde::{Deserialize, Serialize};

/// A role that can be granted to a person.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Role ID.
    pub id: String,
    /// Role name.
    pub name: Option<String>,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(Role);

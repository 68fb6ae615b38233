//! Licenses.

use super::ListError;
use crate::client::WebexClient;
use serde::{Deserialize, Serialize};

/// A license available in an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    /// License ID.
    pub id: String,
    /// License name.
    pub name: Option<String>,
    /// Total units.
    pub total_units: Option<u64>,
    /// Consumed units.
    pub consumed_units: Option<u64>,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(License);

impl License {
    /// Units still available, when both counts are known.
    pub fn remaining_units(&self) -> Option<u64> {
        Some(self.total_units?.saturating_sub(self.consumed_units?))
    }
}

//! Core data types for the Webex API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Implements [`ApiEntity`](crate::decode::ApiEntity) for types with a
/// `client: Option<WebexClient>` field.
macro_rules! api_entity {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl crate::decode::ApiEntity for $ty {
                const OBJECT_TYPE: &'static str = stringify!($ty);

                fn attach(&mut self, client: &crate::client::WebexClient) {
                    self.client = Some(client.clone());
                }

                fn client(&self) -> Option<&crate::client::WebexClient> {
                    self.client.as_ref()
                }
            }
        )+
    };
}

mod events;
mod licenses;
mod memberships;
mod messages;
mod organizations;
mod people;
mod resource_groups;
mod roles;
mod rooms;
mod teams;
mod webhooks;

pub use events::*;
pub use licenses::*;
pub use memberships::*;
pub use messages::*;
pub use organizations::*;
pub use people::*;
pub use resource_groups::*;
pub use roles::*;
pub use rooms::*;
pub use teams::*;
pub use webhooks::*;

/// Per-item error reported inside an otherwise successful list response.
///
/// Keys are the names of the fields the server could not produce, e.g.
/// `title` when a room title could not be decrypted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListError {
    /// Errors by field name.
    #[serde(flatten)]
    pub fields: HashMap<String, ListErrorDetail>,
}

impl ListError {
    /// Gets the error for a field.
    pub fn field(&self, name: &str) -> Option<&ListErrorDetail> {
        self.fields.get(name)
    }

    /// Returns true if no field reported an error.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Error detail for a single field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListErrorDetail {
    /// Machine-readable code.
    pub code: Option<String>,
    /// Human-readable reason.
    pub reason: Option<String>,
}

/// Result of an operation with no response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMessage {
    /// Fixed "OK" message.
    pub message: String,
    /// HTTP status returned by the server.
    pub status_code: u16,
}

impl ResponseMessage {
    /// Creates the normalized success message.
    pub fn ok(status_code: u16) -> Self {
        Self {
            message: "OK".to_string(),
            status_code,
        }
    }

    /// Returns true for the success message.
    pub fn is_ok(&self) -> bool {
        self.message == "OK"
    }
}

//! Room memberships.

use super::{ListError, ResponseMessage, RoomType};
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::WebexResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person's membership in a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    /// Membership ID.
    pub id: String,
    /// Room ID.
    pub room_id: Option<String>,
    /// Member person ID.
    pub person_id: Option<String>,
    /// Member email.
    pub person_email: Option<String>,
    /// Member display name.
    pub person_display_name: Option<String>,
    /// Member organization ID.
    pub person_org_id: Option<String>,
    /// Whether the member is a moderator.
    #[serde(default)]
    pub is_moderator: bool,
    /// Whether the room is shown in the member's room list.
    #[serde(default)]
    pub is_room_hidden: bool,
    /// Room type.
    pub room_type: Option<RoomType>,
    /// Whether the member is a monitoring bot.
    #[serde(default)]
    pub is_monitor: bool,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(Membership);

impl Membership {
    /// Grants or revokes moderator status, returning the updated membership.
    pub async fn set_moderator(&self, is_moderator: bool) -> WebexResult<Membership> {
        self.bound_client()?
            .memberships()
            .update(&self.id, is_moderator, self.is_room_hidden)
            .await
    }

    /// Removes the member from the room.
    pub async fn delete(&self) -> WebexResult<ResponseMessage> {
        self.bound_client()?.memberships().delete(&self.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_defaults() {
        let membership: Membership =
            serde_json::from_str(r#"{"id": "m1", "roomId": "r1", "personEmail": "a@example.com"}"#)
                .unwrap();

        assert!(!membership.is_moderator);
        assert!(!membership.is_room_hidden);
        assert!(membership.room_type.is_none());
    }
}

//! Rooms.

use super::{ListError, Membership, Message, ResponseMessage};
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::WebexResult;
use crate::pagination::Page;
use crate::query::QueryValue;
use crate::services::{ListMembershipsParams, MessageBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// 1:1 room.
    Direct,
    /// Group room.
    Group,
    /// Type added after this client was built.
    #[serde(other)]
    Unknown,
}

impl QueryValue for RoomType {
    fn query_value(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Group => "group",
            Self::Unknown => "unknown",
        }
    }
}

/// Sort order for room listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomSortBy {
    /// By room ID.
    Id,
    /// Most recent activity first.
    LastActivity,
    /// Most recently created first.
    Created,
}

impl QueryValue for RoomSortBy {
    fn query_value(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::LastActivity => "lastactivity",
            Self::Created => "created",
        }
    }
}

/// Webex room (space).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Room ID.
    pub id: String,
    /// Room title.
    pub title: Option<String>,
    /// Room type.
    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,
    /// Whether the room is moderated.
    #[serde(default)]
    pub is_locked: bool,
    /// Owning team, for team rooms.
    pub team_id: Option<String>,
    /// Last activity time.
    pub last_activity: Option<DateTime<Utc>>,
    /// Creator person ID.
    pub creator_id: Option<String>,
    /// Owner (person or organization) ID.
    pub owner_id: Option<String>,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(Room);

impl Room {
    /// Deletes this room.
    pub async fn delete(&self) -> WebexResult<ResponseMessage> {
        self.bound_client()?.rooms().delete(&self.id).await
    }

    /// Renames this room, returning the updated room.
    pub async fn update_title(&self, title: &str) -> WebexResult<Room> {
        self.bound_client()?.rooms().update(&self.id, title).await
    }

    /// Re-reads this room from the server.
    pub async fn refresh(&self) -> WebexResult<Room> {
        self.bound_client()?.rooms().get(&self.id).await
    }

    /// Lists the memberships of this room.
    pub async fn memberships(&self) -> WebexResult<Page<Membership>> {
        self.bound_client()?
            .memberships()
            .list(&ListMembershipsParams::new().room_id(&self.id))
            .await
    }

    /// Posts a plain-text message to this room.
    pub async fn send_text(&self, text: &str) -> WebexResult<Message> {
        let message = MessageBuilder::new().room_id(&self.id).text(text).build()?;
        self.bound_client()?.messages().create(&message).await
    }
}

/// Meeting details for a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomMeetingInfo {
    /// Room ID.
    pub room_id: String,
    /// Meeting URL.
    pub meeting_link: Option<String>,
    /// SIP address.
    pub sip_address: Option<String>,
    /// Meeting number.
    pub meeting_number: Option<String>,
    /// Toll-free dial-in number.
    pub call_in_toll_free_number: Option<String>,
    /// Toll dial-in number.
    pub call_in_toll_number: Option<String>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(RoomMeetingInfo);

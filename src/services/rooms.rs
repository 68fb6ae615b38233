//! Room operations.

use super::with_max;
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::{WebexError, WebexResult};
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::types::{ResponseMessage, Room, RoomMeetingInfo, RoomSortBy, RoomType};
use serde::Serialize;

/// Service for room operations.
pub struct RoomsService<'a> {
    client: &'a WebexClient,
}

impl<'a> RoomsService<'a> {
    /// Creates a new rooms service.
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Lists rooms the caller is in.
    pub async fn list(&self, params: &ListRoomsParams) -> WebexResult<Page<Room>> {
        self.client.get_page(&params.to_path()?).await
    }

    /// Gets a room.
    pub async fn get(&self, room_id: &str) -> WebexResult<Room> {
        self.client.get_entity(&format!("rooms/{}", room_id)).await
    }

    /// Gets the meeting details of a room.
    pub async fn get_meeting_info(&self, room_id: &str) -> WebexResult<RoomMeetingInfo> {
        self.client
            .get_entity(&format!("rooms/{}/meetingInfo", room_id))
            .await
    }

    /// Creates a room, optionally inside a team.
    pub async fn create(&self, title: &str, team_id: Option<&str>) -> WebexResult<Room> {
        if title.trim().is_empty() {
            return Err(WebexError::validation("Room title is required"));
        }
        let request = RoomRequest {
            title,
            team_id,
            is_locked: None,
        };
        self.client.post_entity("rooms", &request).await
    }

    /// Renames a room.
    pub async fn update(&self, room_id: &str, title: &str) -> WebexResult<Room> {
        if title.trim().is_empty() {
            return Err(WebexError::validation("Room title is required"));
        }
        let request = RoomRequest {
            title,
            team_id: None,
            is_locked: None,
        };
        self.client
            .put_entity(&format!("rooms/{}", room_id), &request)
            .await
    }

    /// Locks or unlocks a room for moderation.
    pub async fn set_locked(&self, room: &Room, is_locked: bool) -> WebexResult<Room> {
        let request = RoomRequest {
            title: room.title.as_deref().unwrap_or_default(),
            team_id: None,
            is_locked: Some(is_locked),
        };
        self.client
            .put_entity(&format!("rooms/{}", room.id), &request)
            .await
    }

    /// Deletes a room.
    pub async fn delete(&self, room_id: &str) -> WebexResult<ResponseMessage> {
        self.client
            .delete(&format!("rooms/{}", room_id), Room::OBJECT_TYPE)
            .await
    }
}

/// Parameters for listing rooms.
#[derive(Debug, Clone, Default)]
pub struct ListRoomsParams {
    /// Only rooms of this team.
    pub team_id: Option<String>,
    /// Only rooms of this type.
    pub room_type: Option<RoomType>,
    /// Sort order.
    pub sort_by: Option<RoomSortBy>,
    /// Page size.
    pub max: Option<u32>,
}

impl ListRoomsParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by team.
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    /// Filters by room type.
    pub fn room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = Some(room_type);
        self
    }

    /// Sets the sort order.
    pub fn sort_by(mut self, sort_by: RoomSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Sets the page size.
    pub fn max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    pub(crate) fn to_path(&self) -> WebexResult<String> {
        let query = QueryBuilder::new("rooms")
            .param("teamId", self.team_id.as_deref())
            .param_enum("type", self.room_type)
            .param_enum("sortBy", self.sort_by);
        with_max(query, self.max).build()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoomRequest<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    team_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_locked: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_build_bare_path() {
        assert_eq!(ListRoomsParams::new().to_path().unwrap(), "rooms");
        assert_eq!(ListRoomsParams::new().max(100).to_path().unwrap(), "rooms");
    }

    #[test]
    fn test_non_default_params() {
        let path = ListRoomsParams::new()
            .team_id("team 1")
            .room_type(RoomType::Group)
            .sort_by(RoomSortBy::LastActivity)
            .max(10)
            .to_path()
            .unwrap();

        assert_eq!(path, "rooms?teamId=team+1&type=group&sortBy=lastactivity&max=10");
    }

    #[test]
    fn test_request_omits_nulls() {
        let request = RoomRequest {
            title: "Ops",
            team_id: None,
            is_locked: None,
        };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"title":"Ops"}"#);
    }
}

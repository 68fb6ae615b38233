//! Room membership operations.

use super::with_max;
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::{WebexError, WebexResult};
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::types::{Membership, ResponseMessage};
use serde::Serialize;

/// Service for room membership operations.
pub struct MembershipsService<'a> {
    client: &'a WebexClient,
}

impl<'a> MembershipsService<'a> {
    /// Creates a new memberships service.
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Lists memberships.
    pub async fn list(&self, params: &ListMembershipsParams) -> WebexResult<Page<Membership>> {
        self.client.get_page(&params.to_path()?).await
    }

    /// Gets a membership.
    pub async fn get(&self, membership_id: &str) -> WebexResult<Membership> {
        self.client
            .get_entity(&format!("memberships/{}", membership_id))
            .await
    }

    /// Adds a person to a room.
    pub async fn create(&self, request: &CreateMembership) -> WebexResult<Membership> {
        request.validate()?;
        self.client.post_entity("memberships", request).await
    }

    /// Updates moderator and hidden flags.
    pub async fn update(
        &self,
        membership_id: &str,
        is_moderator: bool,
        is_room_hidden: bool,
    ) -> WebexResult<Membership> {
        let request = UpdateMembership {
            is_moderator,
            is_room_hidden,
        };
        self.client
            .put_entity(&format!("memberships/{}", membership_id), &request)
            .await
    }

    /// Removes a person from a room.
    pub async fn delete(&self, membership_id: &str) -> WebexResult<ResponseMessage> {
        self.client
            .delete(
                &format!("memberships/{}", membership_id),
                Membership::OBJECT_TYPE,
            )
            .await
    }
}

/// Parameters for listing memberships.
#[derive(Debug, Clone, Default)]
pub struct ListMembershipsParams {
    /// Only memberships of this room.
    pub room_id: Option<String>,
    /// Only memberships of this person.
    pub person_id: Option<String>,
    /// Only memberships of this email.
    pub person_email: Option<String>,
    /// Page size.
    pub max: Option<u32>,
}

impl ListMembershipsParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by room.
    pub fn room_id(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Filters by person ID.
    pub fn person_id(mut self, person_id: impl Into<String>) -> Self {
        self.person_id = Some(person_id.into());
        self
    }

    /// Filters by email.
    pub fn person_email(mut self, email: impl Into<String>) -> Self {
        self.person_email = Some(email.into());
        self
    }

    /// Sets the page size.
    pub fn max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    pub(crate) fn to_path(&self) -> WebexResult<String> {
        let query = QueryBuilder::new("memberships")
            .param("roomId", self.room_id.as_deref())
            .param("personId", self.person_id.as_deref())
            .param("personEmail", self.person_email.as_deref());
        with_max(query, self.max).build()
    }
}

/// Body of an add-member call.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembership {
    /// Room to join.
    pub room_id: String,
    /// Person ID to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    /// Email to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    /// Make the person a moderator.
    pub is_moderator: bool,
}

impl CreateMembership {
    /// Adds a person by ID.
    pub fn person_id(room_id: impl Into<String>, person_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            person_id: Some(person_id.into()),
            ..Self::default()
        }
    }

    /// Adds a person by email.
    pub fn person_email(room_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            person_email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Makes the new member a moderator.
    pub fn moderator(mut self) -> Self {
        self.is_moderator = true;
        self
    }

    fn validate(&self) -> WebexResult<()> {
        if self.room_id.trim().is_empty() {
            return Err(WebexError::validation("Membership room ID is required"));
        }
        if self.person_id.is_none() && self.person_email.is_none() {
            return Err(WebexError::validation(
                "Membership person ID or email is required",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateMembership {
    is_moderator: bool,
    is_room_hidden: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path() {
        assert_eq!(ListMembershipsParams::new().to_path().unwrap(), "memberships");
        assert_eq!(
            ListMembershipsParams::new()
                .room_id("r1")
                .person_email("a+b@example.com")
                .to_path()
                .unwrap(),
            "memberships?roomId=r1&personEmail=a%2Bb%40example.com"
        );
    }

    #[test]
    fn test_create_requires_person() {
        let request = CreateMembership {
            room_id: "r1".into(),
            ..Default::default()
        };
        assert!(request.validate().is_err());
        assert!(CreateMembership::person_email("r1", "a@example.com").validate().is_ok());
    }

    #[test]
    fn test_create_body() {
        let request = CreateMembership::person_id("r1", "p1").moderator();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"roomId":"r1","personId":"p1","isModerator":true}"#
        );
    }
}

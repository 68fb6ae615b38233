//! Team membership operations.

use super::with_max;
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::{WebexError, WebexResult};
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::types::{ResponseMessage, TeamMembership};
use serde::Serialize;

/// Service for team membership operations.
pub struct TeamMembershipsService<'a> {
    client: &'a WebexClient,
}

impl<'a> TeamMembershipsService<'a> {
    /// Creates a new team memberships service.
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Lists the memberships of a team.
    pub async fn list(&self, team_id: &str, max: Option<u32>) -> WebexResult<Page<TeamMembership>> {
        if team_id.trim().is_empty() {
            return Err(WebexError::validation("Team ID is required"));
        }
        let query = QueryBuilder::new("team/memberships").param("teamId", Some(team_id));
        self.client.get_page(&with_max(query, max).build()?).await
    }

    /// Gets a team membership.
    pub async fn get(&self, membership_id: &str) -> WebexResult<TeamMembership> {
        self.client
            .get_entity(&format!("team/memberships/{}", membership_id))
            .await
    }

    /// Adds a person to a team.
    pub async fn create(&self, request: &CreateTeamMembership) -> WebexResult<TeamMembership> {
        if request.team_id.trim().is_empty() {
            return Err(WebexError::validation("Team ID is required"));
        }
        if request.person_id.is_none() && request.person_email.is_none() {
            return Err(WebexError::validation(
                "Team membership person ID or email is required",
            ));
        }
        self.client.post_entity("team/memberships", request).await
    }

    /// Grants or revokes moderator status.
    pub async fn update(&self, membership_id: &str, is_moderator: bool) -> WebexResult<TeamMembership> {
        self.client
            .put_entity(
                &format!("team/memberships/{}", membership_id),
                &UpdateTeamMembership { is_moderator },
            )
            .await
    }

    /// Removes a person from a team.
    pub async fn delete(&self, membership_id: &str) -> WebexResult<ResponseMessage> {
        self.client
            .delete(
                &format!("team/memberships/{}", membership_id),
                TeamMembership::OBJECT_TYPE,
            )
            .await
    }
}

/// Body of an add-team-member call.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMembership {
    /// Team to join.
    pub team_id: String,
    /// Person ID to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    /// Email to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_email: Option<String>,
    /// Make the person a moderator.
    pub is_moderator: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTeamMembership {
    is_moderator: bool,
}

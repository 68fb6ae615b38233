//! Teams and team memberships.

use super::{ListError, ResponseMessage};
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::WebexResult;
use crate::pagination::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A team of people sharing a set of rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team ID.
    pub id: String,
    /// Team name.
    pub name: Option<String>,
    /// Creator person ID.
    pub creator_id: Option<String>,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(Team);

impl Team {
    /// Renames this team, returning the updated team.
    pub async fn update_name(&self, name: &str) -> WebexResult<Team> {
        self.bound_client()?.teams().update(&self.id, name).await
    }

    /// Deletes this team.
    pub async fn delete(&self) -> WebexResult<ResponseMessage> {
        self.bound_client()?.teams().delete(&self.id).await
    }

    /// Lists the memberships of this team.
    pub async fn memberships(&self) -> WebexResult<Page<TeamMembership>> {
        self.bound_client()?
            .team_memberships()
            .list(&self.id, None)
            .await
    }
}

/// A person's membership in a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembership {
    /// Membership ID.
    pub id: String,
    /// Team ID.
    pub team_id: Option<String>,
    /// Member person ID.
    pub person_id: Option<String>,
    /// Member email.
    pub person_email: Option<String>,
    /// Member display name.
    pub person_display_name: Option<String>,
    /// Member organization ID.
    pub person_org_id: Option<String>,
    /// Whether the member is a team moderator.
    #[serde(default)]
    pub is_moderator: bool,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(TeamMembership);

impl TeamMembership {
    /// Grants or revokes moderator status.
    pub async fn set_moderator(&self, is_moderator: bool) -> WebexResult<TeamMembership> {
        self.bound_client()?
            .team_memberships()
            .update(&self.id, is_moderator)
            .await
    }

    /// Removes the member from the team.
    pub async fn delete(&self) -> WebexResult<ResponseMessage> {
        self.bound_client()?.team_memberships().delete(&self.id).await
    }
}

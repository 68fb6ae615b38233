//! Team operations.

use super::with_max;
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::{WebexError, WebexResult};
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::types::{ResponseMessage, Team};
use serde::Serialize;

/// Service for team operations.
pub struct TeamsService<'a> {
    client: &'a WebexClient,
}

impl<'a> TeamsService<'a> {
    /// Creates a new teams service.
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Lists the caller's teams.
    pub async fn list(&self, max: Option<u32>) -> WebexResult<Page<Team>> {
        let path = with_max(QueryBuilder::new("teams"), max).build()?;
        self.client.get_page(&path).await
    }

    /// Gets a team.
    pub async fn get(&self, team_id: &str) -> WebexResult<Team> {
        self.client.get_entity(&format!("teams/{}", team_id)).await
    }

    /// Creates a team.
    pub async fn create(&self, name: &str) -> WebexResult<Team> {
        self.client.post_entity("teams", &team_request(name)?).await
    }

    /// Renames a team.
    pub async fn update(&self, team_id: &str, name: &str) -> WebexResult<Team> {
        self.client
            .put_entity(&format!("teams/{}", team_id), &team_request(name)?)
            .await
    }

    /// Deletes a team.
    pub async fn delete(&self, team_id: &str) -> WebexResult<ResponseMessage> {
        self.client
            .delete(&format!("teams/{}", team_id), Team::OBJECT_TYPE)
            .await
    }
}

#[derive(Debug, Serialize)]
struct TeamRequest<'a> {
    name: &'a str,
}

fn team_request(name: &str) -> WebexResult<TeamRequest<'_>> {
    if name.trim().is_empty() {
        return Err(WebexError::validation("Team name is required"));
    }
    Ok(TeamRequest { name })
}

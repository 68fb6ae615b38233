//! Organization operations.

use super::with_max;
use crate::client::WebexClient;
use crate::errors::WebexResult;
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::types::Organization;

/// Service for organization operations.
pub struct OrganizationsService<'a> {
    client: &'a WebexClient,
}

impl<'a> OrganizationsService<'a> {
    /// Creates a new organizations service.
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Lists organizations visible to the caller.
    pub async fn list(&self, max: Option<u32>) -> WebexResult<Page<Organization>> {
        let path = with_max(QueryBuilder::new("organizations"), max).build()?;
        self.client.get_page(&path).await
    }

    /// Gets an organization.
    pub async fn get(&self, org_id: &str) -> WebexResult<Organization> {
        self.client
            .get_entity(&format!("organizations/{}", org_id))
            .await
    }
}

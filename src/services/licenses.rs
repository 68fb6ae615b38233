//! License operations.

use super::with_max;
use crate::client::WebexClient;
use crate::errors::WebexResult;
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::types::License;

/// Service for license operations.
pub struct LicensesService<'a> {
    client: &'a WebexClient,
}

impl<'a> LicensesService<'a> {
    /// Creates a new licenses service.
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Lists licenses, optionally for another organization.
    pub async fn list(&self, org_id: Option<&str>, max: Option<u32>) -> WebexResult<Page<License>> {
        let query = QueryBuilder::new("licenses").param("orgId", org_id);
        self.client.get_page(&with_max(query, max).build()?).await
    }

    /// Gets a license.
    pub async fn get(&self, license_id: &str) -> WebexResult<License> {
        self.client
            .get_entity(&format!("licenses/{}", license_id))
            .await
    }
}

//! Role operations.

use super::with_max;
use crate::client::WebexClient;
use crate::errors::WebexResult;
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::types::Role;

/// Service for role operations.
pub struct RolesService<'a> {
    client: &'a WebexClient,
}

impl<'a> RolesService<'a> {
    /// Creates a new roles service.
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Lists roles.
    pub async fn list(&self, max: Option<u32>) -> WebexResult<Page<Role>> {
        let path = with_max(QueryBuilder::new("roles"), max).build()?;
        self.client.get_page(&path).await
    }

    /// Gets a role.
    pub async fn get(&self, role_id: &str) -> WebexResult<Role> {
        self.client.get_entity(&format!("roles/{}", role_id)).await
    }
}

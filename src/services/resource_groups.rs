//! Resource group and resource group membership operations.

use super::with_max;
use crate::client::WebexClient;
use crate::errors::WebexResult;
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::types::{ResourceGroup, ResourceGroupMembership, ResourceGroupMembershipStatus};
use serde::Serialize;

/// Service for resource groups and their memberships.
pub struct ResourceGroupsService<'a> {
    client: &'a WebexClient,
}

impl<'a> ResourceGroupsService<'a> {
    /// Creates a new resource groups service.
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Lists resource groups.
    pub async fn list(&self, org_id: Option<&str>) -> WebexResult<Page<ResourceGroup>> {
        let path = QueryBuilder::new("resourceGroups").param("orgId", org_id).build()?;
        self.client.get_page(&path).await
    }

    /// Gets a resource group.
    pub async fn get(&self, resource_group_id: &str) -> WebexResult<ResourceGroup> {
        self.client
            .get_entity(&format!("resourceGroups/{}", resource_group_id))
            .await
    }

    /// Lists resource group memberships.
    pub async fn list_memberships(
        &self,
        params: &ListResourceGroupMembershipsParams,
    ) -> WebexResult<Page<ResourceGroupMembership>> {
        self.client.get_page(&params.to_path()?).await
    }

    /// Gets a resource group membership.
    pub async fn get_membership(&self, membership_id: &str) -> WebexResult<ResourceGroupMembership> {
        self.client
            .get_entity(&format!("resourceGroup/memberships/{}", membership_id))
            .await
    }

    /// Moves a license assignment to another resource group.
    pub async fn update_membership(
        &self,
        membership_id: &str,
        resource_group_id: &str,
        current: &ResourceGroupMembership,
    ) -> WebexResult<ResourceGroupMembership> {
        let request = UpdateResourceGroupMembership {
            resource_group_id,
            license_id: current.license_id.as_deref(),
            person_id: current.person_id.as_deref(),
            person_org_id: current.person_org_id.as_deref(),
            status: current.status,
        };
        self.client
            .put_entity(
                &format!("resourceGroup/memberships/{}", membership_id),
                &request,
            )
            .await
    }
}

/// Parameters for listing resource group memberships.
#[derive(Debug, Clone, Default)]
pub struct ListResourceGroupMembershipsParams {
    /// Only this license.
    pub license_id: Option<String>,
    /// Only this person.
    pub person_id: Option<String>,
    /// Only people of this organization.
    pub person_org_id: Option<String>,
    /// Only this status.
    pub status: Option<ResourceGroupMembershipStatus>,
    /// Page size.
    pub max: Option<u32>,
}

impl ListResourceGroupMembershipsParams {
    pub(crate) fn to_path(&self) -> WebexResult<String> {
        let query = QueryBuilder::new("resourceGroup/memberships")
            .param("licenseId", self.license_id.as_deref())
            .param("personId", self.person_id.as_deref())
            .param("personOrgId", self.person_org_id.as_deref())
            .param_enum("status", self.status);
        with_max(query, self.max).build()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateResourceGroupMembership<'a> {
    resource_group_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    license_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    person_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    person_org_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ResourceGroupMembershipStatus>,
}

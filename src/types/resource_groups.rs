//! Resource groups and their memberships.

use super::ListError;
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::WebexResult;
use crate::query::QueryValue;
use serde::{Deserialize, Serialize};

/// A group of hybrid resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroup {
    /// Resource group ID.
    pub id: String,
    /// Group name.
    pub name: Option<String>,
    /// Organization ID.
    pub org_id: Option<String>,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(ResourceGroup);

/// Provisioning state of a resource group membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceGroupMembershipStatus {
    /// Assignment pending.
    Pending,
    /// Assignment active.
    Activated,
    /// Assignment failed.
    Error,
    /// Status added after this client was built.
    #[serde(other)]
    Unknown,
}

impl QueryValue for ResourceGroupMembershipStatus {
    fn query_value(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Activated => "activated",
            Self::Error => "error",
            Self::Unknown => "unknown",
        }
    }
}

/// Assignment of a person's license to a resource group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroupMembership {
    /// Membership ID.
    pub id: String,
    /// Resource group ID.
    pub resource_group_id: Option<String>,
    /// License ID.
    pub license_id: Option<String>,
    /// Person ID.
    pub person_id: Option<String>,
    /// Organization of the person.
    pub person_org_id: Option<String>,
    /// Provisioning status.
    pub status: Option<ResourceGroupMembershipStatus>,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(ResourceGroupMembership);

impl ResourceGroupMembership {
    /// Moves this assignment to another resource group.
    pub async fn move_to(&self, resource_group_id: &str) -> WebexResult<ResourceGroupMembership> {
        self.bound_client()?
            .resource_groups()
            .update_membership(&self.id, resource_group_id, self)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_status() {
        let membership: ResourceGroupMembership = serde_json::from_str(
            r#"{"id": "rgm1", "resourceGroupId": "rg1", "licenseId": "l1", "personId": "p1", "status": "activated"}"#,
        )
        .unwrap();
        assert_eq!(membership.status, Some(ResourceGroupMembershipStatus::Activated));
        assert_eq!(ResourceGroupMembershipStatus::Pending.query_value(), "pending");
    }
}

//! People.

use super::{ListError, ResponseMessage};
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::WebexResult;
use crate::services::UpdatePerson;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonType {
    /// Human user.
    Person,
    /// Bot account.
    Bot,
    /// Guest application user.
    #[serde(rename = "appuser", alias = "appUser")]
    AppUser,
    /// Any type this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Presence status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonStatus {
    /// Active within the last 10 minutes.
    Active,
    /// In a call.
    Call,
    /// Do not disturb.
    #[serde(rename = "DoNotDisturb", alias = "doNotDisturb")]
    DoNotDisturb,
    /// Inactive.
    Inactive,
    /// In a meeting.
    Meeting,
    /// Out of office.
    #[serde(rename = "OutOfOffice", alias = "outOfOffice")]
    OutOfOffice,
    /// Not yet signed in.
    Pending,
    /// Sharing content.
    Presenting,
    /// Status unknown.
    #[serde(other)]
    Unknown,
}

/// Capability shared by every phone number representation.
pub trait PhoneNumberInfo {
    /// Number type, e.g. `work` or `mobile`.
    fn number_type(&self) -> &str;

    /// The number itself.
    fn number(&self) -> &str;
}

/// Phone number as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// Number type.
    #[serde(rename = "type")]
    pub number_type: String,
    /// Number value.
    pub value: String,
}

impl PhoneNumber {
    /// Creates a phone number.
    pub fn new(number_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            number_type: number_type.into(),
            value: value.into(),
        }
    }
}

impl PhoneNumberInfo for PhoneNumber {
    fn number_type(&self) -> &str {
        &self.number_type
    }

    fn number(&self) -> &str {
        &self.value
    }
}

/// Webex user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Person ID.
    pub id: String,
    /// Email addresses.
    #[serde(default)]
    pub emails: Vec<String>,
    /// Phone numbers.
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,
    /// Display name.
    pub display_name: Option<String>,
    /// Nickname.
    pub nick_name: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// Organization ID.
    pub org_id: Option<String>,
    /// Role IDs.
    #[serde(default)]
    pub roles: Vec<String>,
    /// License IDs.
    #[serde(default)]
    pub licenses: Vec<String>,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Last modification time.
    pub last_modified: Option<DateTime<Utc>>,
    /// Time zone.
    pub timezone: Option<String>,
    /// Last activity time.
    pub last_activity: Option<DateTime<Utc>>,
    /// Presence status.
    pub status: Option<PersonStatus>,
    /// Whether the invitation is still pending.
    pub invite_pending: Option<bool>,
    /// Whether sign-in is enabled.
    pub login_enabled: Option<bool>,
    /// Account type.
    #[serde(rename = "type")]
    pub person_type: Option<PersonType>,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(Person);

impl Person {
    /// Phone numbers viewed through [`PhoneNumberInfo`].
    pub fn phones(&self) -> Vec<&dyn PhoneNumberInfo> {
        self.phone_numbers
            .iter()
            .map(|p| p as &dyn PhoneNumberInfo)
            .collect()
    }

    /// First listed email address.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    /// Starts an update pre-filled with this person's current details.
    pub fn to_update(&self) -> UpdatePerson {
        UpdatePerson {
            emails: self.emails.clone(),
            phone_numbers: self.phone_numbers.clone(),
            display_name: self.display_name.clone(),
            nick_name: self.nick_name.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            avatar: self.avatar.clone(),
            org_id: self.org_id.clone(),
            roles: self.roles.clone(),
            licenses: self.licenses.clone(),
            login_enabled: self.login_enabled,
        }
    }

    /// Applies an update to this person, returning the updated person.
    pub async fn update(&self, update: &UpdatePerson) -> WebexResult<Person> {
        self.bound_client()?.people().update(&self.id, update).await
    }

    /// Deletes this person.
    pub async fn delete(&self) -> WebexResult<ResponseMessage> {
        self.bound_client()?.people().delete(&self.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_deserialize() {
        let person: Person = serde_json::from_str(
            r#"{
                "id": "p1",
                "emails": ["john@example.com"],
                "phoneNumbers": [{"type": "work", "value": "+1 408 526 7209"}, {"type": "mobile", "value": "+1 408 555 0100"}],
                "displayName": "John Andersen",
                "status": "DoNotDisturb",
                "type": "person"
            }"#,
        )
        .unwrap();

        assert_eq!(person.primary_email(), Some("john@example.com"));
        assert_eq!(person.status, Some(PersonStatus::DoNotDisturb));
        assert_eq!(person.person_type, Some(PersonType::Person));
    }

    #[test]
    fn test_phones_view_matches_concrete_list() {
        let person: Person = serde_json::from_str(
            r#"{"id": "p1", "phoneNumbers": [{"type": "work", "value": "1"}, {"type": "mobile", "value": "2"}]}"#,
        )
        .unwrap();

        let phones = person.phones();
        assert_eq!(phones.len(), person.phone_numbers.len());
        assert_eq!(phones[0].number_type(), "work");
        assert_eq!(phones[1].number(), "2");
    }

    #[test]
    fn test_mixed_case_wire_values() {
        let person: Person =
            serde_json::from_str(r#"{"id": "p", "status": "OutOfOffice", "type": "appuser"}"#)
                .unwrap();
        assert_eq!(person.status, Some(PersonStatus::OutOfOffice));
        assert_eq!(person.person_type, Some(PersonType::AppUser));

        let json = serde_json::to_value(PersonStatus::DoNotDisturb).unwrap();
        assert_eq!(json, serde_json::json!("DoNotDisturb"));
        let json = serde_json::to_value(PersonType::AppUser).unwrap();
        assert_eq!(json, serde_json::json!("appuser"));
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let person: Person =
            serde_json::from_str(r#"{"id": "p1", "status": "somethingNew"}"#).unwrap();
        assert_eq!(person.status, Some(PersonStatus::Unknown));
    }

    #[test]
    fn test_to_update_copies_details() {
        let person: Person = serde_json::from_str(
            r#"{"id": "p1", "emails": ["a@example.com"], "displayName": "A", "roles": ["r1"]}"#,
        )
        .unwrap();

        let update = person.to_update();
        assert_eq!(update.emails, vec!["a@example.com".to_string()]);
        assert_eq!(update.display_name.as_deref(), Some("A"));
        assert_eq!(update.roles, vec!["r1".to_string()]);
    }
}

//! People operations and the person builder.

use super::with_max;
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::{WebexError, WebexResult};
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::types::{Person, PhoneNumber, ResponseMessage};
use serde::Serialize;

/// Most IDs the people endpoint accepts in one lookup.
pub const MAX_PEOPLE_IDS: usize = 85;

/// Service for people operations.
pub struct PeopleService<'a> {
    client: &'a WebexClient,
}

impl<'a> PeopleService<'a> {
    /// Creates a new people service.
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Lists people. Fails before any request when more than
    /// [`MAX_PEOPLE_IDS`] IDs are given.
    pub async fn list(&self, params: &ListPeopleParams) -> WebexResult<Page<Person>> {
        self.client.get_page(&params.to_path()?).await
    }

    /// Gets the authenticated person.
    pub async fn me(&self) -> WebexResult<Person> {
        self.client.get_entity("people/me").await
    }

    /// Gets a person.
    pub async fn get(&self, person_id: &str) -> WebexResult<Person> {
        self.client
            .get_entity(&format!("people/{}", person_id))
            .await
    }

    /// Creates a person. Requires admin rights.
    pub async fn create(&self, person: &CreatePerson) -> WebexResult<Person> {
        self.client.post_entity("people", person).await
    }

    /// Updates a person. Requires admin rights.
    pub async fn update(&self, person_id: &str, update: &UpdatePerson) -> WebexResult<Person> {
        self.client
            .put_entity(&format!("people/{}", person_id), update)
            .await
    }

    /// Deletes a person. Requires admin rights.
    pub async fn delete(&self, person_id: &str) -> WebexResult<ResponseMessage> {
        self.client
            .delete(&format!("people/{}", person_id), Person::OBJECT_TYPE)
            .await
    }
}

/// Parameters for listing people.
#[derive(Debug, Clone, Default)]
pub struct ListPeopleParams {
    /// Exact email match.
    pub email: Option<String>,
    /// Display name prefix.
    pub display_name: Option<String>,
    /// Lookup by IDs, at most [`MAX_PEOPLE_IDS`].
    pub ids: Vec<String>,
    /// Organization to search.
    pub org_id: Option<String>,
    /// Page size.
    pub max: Option<u32>,
}

impl ListPeopleParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Filters by display name prefix.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Looks up specific people.
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Searches another organization.
    pub fn org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(org_id.into());
        self
    }

    /// Sets the page size.
    pub fn max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    pub(crate) fn to_path(&self) -> WebexResult<String> {
        if self.ids.len() > MAX_PEOPLE_IDS {
            return Err(WebexError::out_of_range(format!(
                "At most {} person IDs can be looked up at once, got {}",
                MAX_PEOPLE_IDS,
                self.ids.len()
            )));
        }
        let query = QueryBuilder::new("people")
            .param("email", self.email.as_deref())
            .param("displayName", self.display_name.as_deref())
            .param_list("id", &self.ids)
            .param("orgId", self.org_id.as_deref());
        with_max(query, self.max).build()
    }
}

/// Validated body of a create-person call. Produced by [`PersonBuilder`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerson {
    emails: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    phone_numbers: Vec<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    org_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    roles: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    licenses: Vec<String>,
}

/// Builder for [`CreatePerson`].
///
/// `build()` requires an email and at least one of display, first or last
/// name.
#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
    emails: Vec<String>,
    phone_numbers: Vec<PhoneNumber>,
    display_name: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    avatar: Option<String>,
    org_id: Option<String>,
    roles: Vec<String>,
    licenses: Vec<String>,
}

impl PersonBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.emails.push(email.into());
        self
    }

    /// Adds a phone number.
    pub fn phone_number(mut self, number_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.phone_numbers.push(PhoneNumber::new(number_type, value));
        self
    }

    /// Sets the display name.
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Sets the first name.
    pub fn first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    /// Sets the avatar URL.
    pub fn avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar = Some(url.into());
        self
    }

    /// Sets the organization.
    pub fn org_id(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = Some(org_id.into());
        self
    }

    /// Grants a role.
    pub fn role(mut self, role_id: impl Into<String>) -> Self {
        self.roles.push(role_id.into());
        self
    }

    /// Assigns a license.
    pub fn license(mut self, license_id: impl Into<String>) -> Self {
        self.licenses.push(license_id.into());
        self
    }

    /// Validates and produces the request body.
    pub fn build(self) -> WebexResult<CreatePerson> {
        let emails: Vec<String> = self
            .emails
            .into_iter()
            .filter(|e| !e.trim().is_empty())
            .collect();
        if emails.is_empty() {
            return Err(WebexError::validation("Person email is required"));
        }

        let named = [&self.display_name, &self.first_name, &self.last_name]
            .iter()
            .any(|n| n.as_deref().map_or(false, |s| !s.trim().is_empty()));
        if !named {
            return Err(WebexError::validation(
                "Person display name, first name or last name is required",
            ));
        }

        Ok(CreatePerson {
            emails,
            phone_numbers: self.phone_numbers,
            display_name: self.display_name,
            first_name: self.first_name,
            last_name: self.last_name,
            avatar: self.avatar,
            org_id: self.org_id,
            roles: self.roles,
            licenses: self.licenses,
        })
    }
}

/// Body of an update-person call.
///
/// The API replaces the whole record, so start from [`Person::to_update`]
/// and change only what is needed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerson {
    /// Email addresses.
    pub emails: Vec<String>,
    /// Phone numbers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<PhoneNumber>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Nickname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Organization ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    /// Role IDs.
    pub roles: Vec<String>,
    /// License IDs.
    pub licenses: Vec<String>,
    /// Whether sign-in is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_enabled: Option<bool>,
}

//! Message operations and the message builder.

use super::with_max;
use crate::client::{FileUpload, MultipartBody, WebexClient};
use crate::decode::ApiEntity;
use crate::errors::{WebexError, WebexResult};
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::types::{Message, ResponseMessage};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Service for message operations.
pub struct MessagesService<'a> {
    client: &'a WebexClient,
}

impl<'a> MessagesService<'a> {
    /// Creates a new messages service.
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Lists messages in a room, newest first.
    pub async fn list(&self, room_id: &str, params: &ListMessagesParams) -> WebexResult<Page<Message>> {
        self.client.get_page(&params.to_path(room_id)?).await
    }

    /// Lists 1:1 messages with a person.
    pub async fn list_direct(&self, params: &ListDirectMessagesParams) -> WebexResult<Page<Message>> {
        self.client.get_page(&params.to_path()?).await
    }

    /// Gets a message.
    pub async fn get(&self, message_id: &str) -> WebexResult<Message> {
        self.client
            .get_entity(&format!("messages/{}", message_id))
            .await
    }

    /// Posts a message.
    ///
    /// A local file attachment is uploaded as multipart form data; remote
    /// URLs are sent as JSON.
    pub async fn create(&self, message: &CreateMessage) -> WebexResult<Message> {
        match message.local_file() {
            Some(path) => {
                let upload = FileUpload::from_path("files", path).await?;
                self.client
                    .post_multipart_entity("messages", message.to_multipart(upload))
                    .await
            }
            None => self.client.post_entity("messages", message).await,
        }
    }

    /// Deletes a message.
    pub async fn delete(&self, message_id: &str) -> WebexResult<ResponseMessage> {
        self.client
            .delete(&format!("messages/{}", message_id), Message::OBJECT_TYPE)
            .await
    }
}

/// Parameters for listing room messages.
#[derive(Debug, Clone, Default)]
pub struct ListMessagesParams {
    /// Only messages mentioning these people (`me` for the caller).
    pub mentioned_people: Vec<String>,
    /// Only messages sent before this instant.
    pub before: Option<DateTime<Utc>>,
    /// Only messages sent before this message.
    pub before_message: Option<String>,
    /// Only replies to this parent message.
    pub parent_id: Option<String>,
    /// Page size.
    pub max: Option<u32>,
}

impl ListMessagesParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mentioned person filter.
    pub fn mentioned(mut self, person_id: impl Into<String>) -> Self {
        self.mentioned_people.push(person_id.into());
        self
    }

    /// Only messages before an instant.
    pub fn before(mut self, before: DateTime<Utc>) -> Self {
        self.before = Some(before);
        self
    }

    /// Only messages before a message.
    pub fn before_message(mut self, message_id: impl Into<String>) -> Self {
        self.before_message = Some(message_id.into());
        self
    }

    /// Only replies in a thread.
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Sets the page size.
    pub fn max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }

    pub(crate) fn to_path(&self, room_id: &str) -> WebexResult<String> {
        if room_id.is_empty() {
            return Err(WebexError::validation("Room ID is required to list messages"));
        }
        let query = QueryBuilder::new("messages")
            .param("roomId", Some(room_id))
            .param("parentId", self.parent_id.as_deref())
            .param_list("mentionedPeople", &self.mentioned_people)
            .param_timestamp("before", self.before)
            .param("beforeMessage", self.before_message.as_deref());
        with_max(query, self.max).build()
    }
}

/// Parameters for listing 1:1 messages.
#[derive(Debug, Clone, Default)]
pub struct ListDirectMessagesParams {
    /// Other participant's ID.
    pub person_id: Option<String>,
    /// Other participant's email.
    pub person_email: Option<String>,
    /// Only replies to this parent message.
    pub parent_id: Option<String>,
}

impl ListDirectMessagesParams {
    /// Direct messages with a person ID.
    pub fn with_person_id(person_id: impl Into<String>) -> Self {
        Self {
            person_id: Some(person_id.into()),
            ..Self::default()
        }
    }

    /// Direct messages with a person email.
    pub fn with_person_email(email: impl Into<String>) -> Self {
        Self {
            person_email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Only replies in a thread.
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub(crate) fn to_path(&self) -> WebexResult<String> {
        if self.person_id.is_none() && self.person_email.is_none() {
            return Err(WebexError::validation(
                "A person ID or email is required to list direct messages",
            ));
        }
        QueryBuilder::new("messages/direct")
            .param("parentId", self.parent_id.as_deref())
            .param("personId", self.person_id.as_deref())
            .param("personEmail", self.person_email.as_deref())
            .build()
    }
}

/// Validated body of a create-message call. Produced by [`MessageBuilder`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    files: Vec<String>,
    #[serde(skip)]
    local_file: Option<PathBuf>,
}

impl CreateMessage {
    /// The local file to upload, if the attachment is not a URL.
    pub fn local_file(&self) -> Option<&PathBuf> {
        self.local_file.as_ref()
    }

    fn to_multipart(&self, upload: FileUpload) -> MultipartBody {
        MultipartBody::new()
            .field("roomId", self.room_id.clone())
            .field("toPersonId", self.to_person_id.clone())
            .field("toPersonEmail", self.to_person_email.clone())
            .field("text", self.text.clone())
            .field("markdown", self.markdown.clone())
            .field("parentId", self.parent_id.clone())
            .file(upload)
    }
}

/// Builder for [`CreateMessage`].
///
/// `build()` requires text or markdown and one recipient (room ID, person
/// ID, or person email).
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    room_id: Option<String>,
    to_person_id: Option<String>,
    to_person_email: Option<String>,
    text: Option<String>,
    markdown: Option<String>,
    parent_id: Option<String>,
    file: Option<String>,
}

impl MessageBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts to a room.
    pub fn room_id(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Posts 1:1 to a person ID.
    pub fn to_person_id(mut self, person_id: impl Into<String>) -> Self {
        self.to_person_id = Some(person_id.into());
        self
    }

    /// Posts 1:1 to an email address.
    pub fn to_person_email(mut self, email: impl Into<String>) -> Self {
        self.to_person_email = Some(email.into());
        self
    }

    /// Sets the plain text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the markdown.
    pub fn markdown(mut self, markdown: impl Into<String>) -> Self {
        self.markdown = Some(markdown.into());
        self
    }

    /// Replies in a thread.
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Attaches one file, either a public URL or a local path.
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Validates and produces the request body.
    pub fn build(self) -> WebexResult<CreateMessage> {
        let present = |v: &Option<String>| v.as_deref().map_or(false, |s| !s.trim().is_empty());

        if !present(&self.text) && !present(&self.markdown) {
            return Err(WebexError::validation("Message text or markdown is required"));
        }
        if !present(&self.room_id) && !present(&self.to_person_id) && !present(&self.to_person_email) {
            return Err(WebexError::validation(
                "Message recipient is required: room ID, person ID or person email",
            ));
        }

        let (files, local_file) = match self.file.filter(|f| !f.trim().is_empty()) {
            Some(file) if is_remote(&file) => (vec![file], None),
            Some(file) => (Vec::new(), Some(PathBuf::from(file))),
            None => (Vec::new(), None),
        };

        Ok(CreateMessage {
            room_id: self.room_id,
            to_person_id: self.to_person_id,
            to_person_email: self.to_person_email,
            text: self.text,
            markdown: self.markdown,
            parent_id: self.parent_id,
            files,
            local_file,
        })
    }
}

fn is_remote(file: &str) -> bool {
    url::Url::parse(file)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WebexErrorKind;
    use chrono::TimeZone;

    #[test]
    fn test_builder_requires_text() {
        let err = MessageBuilder::new().room_id("r1").build().unwrap_err();
        assert_eq!(err.kind(), WebexErrorKind::ValidationFailed);
    }

    #[test]
    fn test_builder_requires_recipient() {
        let err = MessageBuilder::new().text("hello").build().unwrap_err();
        assert_eq!(err.kind(), WebexErrorKind::ValidationFailed);

        let err = MessageBuilder::new()
            .text("hello")
            .room_id("  ")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), WebexErrorKind::ValidationFailed);
    }

    #[test]
    fn test_builder_serializes_json() {
        let message = MessageBuilder::new()
            .to_person_email("a@example.com")
            .markdown("**hi**")
            .file("https://example.com/logo.png")
            .build()
            .unwrap();

        assert!(message.local_file().is_none());
        assert_eq!(
            serde_json::to_string(&message).unwrap(),
            r#"{"toPersonEmail":"a@example.com","markdown":"**hi**","files":["https://example.com/logo.png"]}"#
        );
    }

    #[test]
    fn test_local_file_is_not_serialized() {
        let message = MessageBuilder::new()
            .room_id("r1")
            .text("report")
            .file("/tmp/report.pdf")
            .build()
            .unwrap();

        assert_eq!(message.local_file(), Some(&PathBuf::from("/tmp/report.pdf")));
        assert_eq!(
            serde_json::to_string(&message).unwrap(),
            r#"{"roomId":"r1","text":"report"}"#
        );

        let upload = FileUpload::new("files", "report.pdf", vec![1u8]);
        let form = message.to_multipart(upload);
        assert_eq!(
            form.fields,
            vec![
                ("roomId".to_string(), "r1".to_string()),
                ("text".to_string(), "report".to_string()),
            ]
        );
        assert!(form.file.is_some());
    }

    #[test]
    fn test_list_messages_path() {
        let before = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let path = ListMessagesParams::new()
            .mentioned("me")
            .mentioned("p2")
            .before(before)
            .to_path("r1")
            .unwrap();

        assert_eq!(
            path,
            "messages?roomId=r1&mentionedPeople=me%2Cp2&before=2024-01-01T00%3A00%3A00.0000000Z"
        );
    }

    #[test]
    fn test_list_direct_requires_person() {
        let err = ListDirectMessagesParams::default().to_path().unwrap_err();
        assert_eq!(err.kind(), WebexErrorKind::ValidationFailed);

        let path = ListDirectMessagesParams::with_person_email("a@example.com")
            .to_path()
            .unwrap();
        assert_eq!(path, "messages/direct?personEmail=a%40example.com");
    }
}

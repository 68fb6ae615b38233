//! Messages.

use super::{ListError, ResponseMessage, RoomType};
use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::WebexResult;
use crate::services::MessageBuilder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message posted to a room or person.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message ID.
    pub id: String,
    /// Room the message was posted in.
    pub room_id: Option<String>,
    /// Type of that room.
    pub room_type: Option<RoomType>,
    /// Recipient person ID (1:1 messages).
    pub to_person_id: Option<String>,
    /// Recipient email (1:1 messages).
    pub to_person_email: Option<String>,
    /// Plain text.
    pub text: Option<String>,
    /// Markdown source.
    pub markdown: Option<String>,
    /// Rendered HTML.
    pub html: Option<String>,
    /// Attachment URLs.
    #[serde(default)]
    pub files: Vec<String>,
    /// Sender person ID.
    pub person_id: Option<String>,
    /// Sender email.
    pub person_email: Option<String>,
    /// Mentioned person IDs.
    #[serde(default)]
    pub mentioned_people: Vec<String>,
    /// Mentioned groups, e.g. `all`.
    #[serde(default)]
    pub mentioned_groups: Vec<String>,
    /// Parent message for threaded replies.
    pub parent_id: Option<String>,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Last edit time.
    pub updated: Option<DateTime<Utc>>,
    /// Per-item error from a list response.
    pub errors: Option<ListError>,
    #[serde(skip)]
    client: Option<WebexClient>,
}

api_entity!(Message);

impl Message {
    /// Deletes this message.
    pub async fn delete(&self) -> WebexResult<ResponseMessage> {
        self.bound_client()?.messages().delete(&self.id).await
    }

    /// Replies in a thread under this message.
    pub async fn reply(&self, text: &str) -> WebexResult<Message> {
        let mut builder = MessageBuilder::new().text(text).parent_id(&self.id);
        builder = match (&self.room_id, &self.to_person_email) {
            (Some(room_id), _) => builder.room_id(room_id),
            (None, Some(email)) => builder.to_person_email(email),
            (None, None) => builder,
        };
        let message = builder.build()?;
        self.bound_client()?.messages().create(&message).await
    }

    /// Returns true if the given person was mentioned.
    pub fn mentions(&self, person_id: &str) -> bool {
        self.mentioned_people.iter().any(|p| p == person_id)
    }
}

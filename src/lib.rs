//! # Webex Integration Library
//!
//! A typed Webex Teams REST API client with:
//! - Rooms, messages, people, memberships, teams, webhooks, events,
//!   licenses, roles, organizations and resource groups
//! - Cursor pagination from the `Link` header
//! - Retry on `429 Too Many Requests` honoring `Retry-After`
//! - Entities that carry their client for follow-up calls
//! - Webhook notification parsing and signature verification
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_webex::{ListRoomsParams, MessageBuilder, WebexClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WebexClient::builder().from_env().build()?;
//!
//!     let rooms = client.rooms().list(&ListRoomsParams::new().max(10)).await?;
//!     for room in &rooms {
//!         println!("{}", room.title.as_deref().unwrap_or("(untitled)"));
//!     }
//!
//!     let message = MessageBuilder::new()
//!         .to_person_email("someone@example.com")
//!         .markdown("**Hello** from Rust")
//!         .build()?;
//!     let sent = client.messages().create(&message).await?;
//!     sent.reply("and a threaded follow-up").await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// Authentication
pub mod auth;

// HTTP client and transport
pub mod client;

// Request paths and response decoding
pub mod decode;
pub mod pagination;
pub mod query;

// API Services
pub mod services;

// Webhooks
pub mod webhooks;

// Resilience patterns
pub mod resilience;

// Observability
pub mod observability;

// Re-exports for convenience
pub use auth::BearerToken;
pub use client::{WebexClient, WebexClientBuilder};
pub use config::{RetryConfig, WebexConfig, WebexConfigBuilder};
pub use decode::ApiEntity;
pub use errors::{WebexError, WebexErrorKind, WebexResult};
pub use pagination::{Page, PaginationLinks};
pub use services::{
    CreateMembership, CreateMessage, CreatePerson, CreateTeamMembership, CreateWebhook,
    ListDirectMessagesParams, ListEventsParams, ListMembershipsParams, ListMessagesParams,
    ListPeopleParams, ListResourceGroupMembershipsParams, ListRoomsParams, MessageBuilder,
    PersonBuilder, UpdatePerson, UpdateWebhook,
};
pub use types::*;
pub use webhooks::{WebhookNotification, WebhookVerifier};

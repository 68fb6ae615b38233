//! Webex API service implementations.

mod events;
mod licenses;
mod memberships;
mod messages;
mod organizations;
mod people;
mod resource_groups;
mod roles;
mod rooms;
mod team_memberships;
mod teams;
mod webhooks;

pub use events::*;
pub use licenses::*;
pub use memberships::*;
pub use messages::*;
pub use organizations::*;
pub use people::*;
pub use resource_groups::*;
pub use roles::*;
pub use rooms::*;
pub use team_memberships::*;
pub use teams::*;
pub use webhooks::*;

use crate::query::QueryBuilder;

/// Page size the API uses when `max` is not sent.
pub const DEFAULT_MAX: u32 = 100;

/// Adds `max` unless it is the server default.
fn with_max(query: QueryBuilder, max: Option<u32>) -> QueryBuilder {
    query.param_with_default("max", max.unwrap_or(DEFAULT_MAX), DEFAULT_MAX)
}

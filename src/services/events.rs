//! Event operations.

use super::with_max;
use crate::client::WebexClient;
use crate::errors::WebexResult;
use crate::pagination::Page;
use crate::query::QueryBuilder;
use crate::types::{Event, EventResource, EventType};
use chrono::{DateTime, Utc};

/// Service for event operations. Requires compliance officer rights.
pub struct EventsService<'a> {
    client: &'a WebexClient,
}

impl<'a> EventsService<'a> {
    /// Creates a new events service.
    pub fn new(client: &'a WebexClient) -> Self {
        Self { client }
    }

    /// Lists events.
    pub async fn list(&self, params: &ListEventsParams) -> WebexResult<Page<Event>> {
        self.client.get_page(&params.to_path()?).await
    }

    /// Gets an event.
    pub async fn get(&self, event_id: &str) -> WebexResult<Event> {
        self.client.get_entity(&format!("events/{}", event_id)).await
    }
}

/// Parameters for listing events.
#[derive(Debug, Clone, Default)]
pub struct ListEventsParams {
    /// Only events about this resource.
    pub resource: Option<EventResource>,
    /// Only events of this type.
    pub event_type: Option<EventType>,
    /// Only events caused by this person.
    pub actor_id: Option<String>,
    /// Events at or after this instant.
    pub from: Option<DateTime<Utc>>,
    /// Events before this instant.
    pub to: Option<DateTime<Utc>>,
    /// Page size.
    pub max: Option<u32>,
}

impl ListEventsParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by resource.
    pub fn resource(mut self, resource: EventResource) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Filters by event type.
    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    /// Filters by time window.
    pub fn between(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub(crate) fn to_path(&self) -> WebexResult<String> {
        let query = QueryBuilder::new("events")
            .param_enum("resource", self.resource)
            .param_enum("type", self.event_type)
            .param("actorId", self.actor_id.as_deref())
            .param_timestamp("from", self.from)
            .param_timestamp("to", self.to);
        with_max(query, self.max).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_events_path() {
        assert_eq!(ListEventsParams::new().to_path().unwrap(), "events");

        let from = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
        let path = ListEventsParams::new()
            .resource(EventResource::Messages)
            .event_type(EventType::Deleted)
            .between(from, to)
            .to_path()
            .unwrap();

        assert_eq!(
            path,
            "events?resource=messages&type=deleted&from=2024-03-01T12%3A00%3A00.0000000Z&to=2024-03-02T12%3A00%3A00.0000000Z"
        );
    }
}

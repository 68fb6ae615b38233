//! Endpoint path construction with optional query parameters.

use crate::errors::{WebexError, WebexResult};
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use std::fmt::Display;

/// Enumerations that appear as query parameter values.
///
/// The wire form is the lowercase variant name.
pub trait QueryValue {
    /// Returns the query string form of the value.
    fn query_value(&self) -> &'static str;
}

/// Builds a request path from an endpoint and its optional parameters.
///
/// Parameters that are absent or equal to their declared default are left
/// out, so a call with every parameter at its default yields the bare path.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    path: String,
    params: Vec<(String, String)>,
}

impl QueryBuilder {
    /// Starts a path for the given endpoint.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter when a value is present.
    pub fn param<V: Display>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.params.push((name.to_string(), value));
            }
        }
        self
    }

    /// Adds a parameter unless it equals its declared default.
    pub fn param_with_default<V: Display + PartialEq>(self, name: &str, value: V, default: V) -> Self {
        if value == default {
            self
        } else {
            self.param(name, Some(value))
        }
    }

    /// Adds an enumeration parameter using its lowercase name.
    pub fn param_enum<E: QueryValue>(self, name: &str, value: Option<E>) -> Self {
        self.param(name, value.as_ref().map(E::query_value))
    }

    /// Adds a timestamp parameter in the API's seven-digit UTC format.
    pub fn param_timestamp(self, name: &str, value: Option<DateTime<Utc>>) -> Self {
        self.param(name, value.map(format_timestamp))
    }

    /// Adds a multi-valued parameter joined with commas.
    pub fn param_list<S: AsRef<str>>(self, name: &str, values: &[S]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        self.param(name, Some(joined))
    }

    /// Returns true if no parameter survived.
    pub fn is_bare(&self) -> bool {
        self.params.is_empty()
    }

    /// Produces `path` or `path?query`.
    pub fn build(self) -> WebexResult<String> {
        if self.params.is_empty() {
            return Ok(self.path);
        }

        let query = serde_urlencoded::to_string(&self.params).map_err(|e| {
            WebexError::validation(format!("Failed to encode query parameters: {}", e))
        })?;

        Ok(format!("{}?{}", self.path, query))
    }
}

/// Formats an instant as `yyyy-MM-ddTHH:mm:ss.fffffffZ`.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    let ticks = value.nanosecond() % 1_000_000_000 / 100;
    format!("{}.{:07}Z", value.format("%Y-%m-%dT%H:%M:%S"), ticks)
}

/// Parses a timestamp produced by [`format_timestamp`] or any RFC 3339 string.
pub fn parse_timestamp(value: &str) -> WebexResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
        })
        .map_err(|e| WebexError::validation(format!("Invalid timestamp '{}': {}", value, e)))
}

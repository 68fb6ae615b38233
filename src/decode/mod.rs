//! Response decoding into typed entities and pages.

use crate::client::WebexClient;
use crate::errors::{WebexError, WebexResult};
use crate::pagination::{Page, PaginationLinks};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A resource the decoder can attach a client handle to.
pub trait ApiEntity: DeserializeOwned {
    /// Entity type name used to annotate errors.
    const OBJECT_TYPE: &'static str;

    /// Stores a handle to the client that produced this value.
    fn attach(&mut self, client: &WebexClient);

    /// The attached client, if any.
    fn client(&self) -> Option<&WebexClient>;

    /// The attached client, or an error for values built by hand.
    fn bound_client(&self) -> WebexResult<&WebexClient> {
        self.client().ok_or_else(|| WebexError::unbound(Self::OBJECT_TYPE))
    }
}

/// Body of every list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    #[serde(default)]
    not_found_ids: Option<Vec<String>>,
}

/// Decodes a single entity and attaches the client to it.
pub fn decode_entity<T: ApiEntity>(body: &[u8], client: Option<&WebexClient>) -> WebexResult<T> {
    let mut entity: T = serde_json::from_slice(body).map_err(|e| {
        WebexError::decode(format!("Failed to decode {}: {}", T::OBJECT_TYPE, e))
            .with_object_type(T::OBJECT_TYPE)
            .with_cause(e)
    })?;

    if let Some(client) = client {
        entity.attach(client);
    }
    Ok(entity)
}

/// Decodes a list body, attaches the client to every item, and reads the
/// next-page cursor from the `Link` header.
pub fn decode_list<T: ApiEntity>(
    body: &[u8],
    headers: &HeaderMap,
    base_url: &str,
    client: Option<&WebexClient>,
) -> WebexResult<Page<T>> {
    let envelope: ItemsEnvelope<T> = serde_json::from_slice(body).map_err(|e| {
        WebexError::decode(format!("Failed to decode {} list: {}", T::OBJECT_TYPE, e))
            .with_object_type(T::OBJECT_TYPE)
            .with_cause(e)
    })?;

    let mut items = envelope.items;
    if let Some(client) = client {
        for item in &mut items {
            item.attach(client);
        }
    }

    let next = PaginationLinks::from_headers(headers)
        .next
        .and_then(|url| relativize(&url, base_url));

    Ok(Page::new(
        items,
        next,
        envelope.not_found_ids.unwrap_or_default(),
        client.cloned(),
    ))
}

/// Strips the base URL from an absolute link, leaving a relative path.
///
/// Returns `None` unless the remainder is a well-formed relative reference
/// that resolves back under the base URL.
pub fn relativize(link: &str, base_url: &str) -> Option<String> {
    let base = base_url.trim_end_matches('/');
    let rest = link.trim().strip_prefix(base)?;

    if !rest.starts_with('/') {
        return None;
    }
    let relative = rest.trim_start_matches('/');
    if relative.is_empty() || url::Url::parse(relative).is_ok() {
        return None;
    }

    let base = url::Url::parse(&format!("{}/", base)).ok()?;
    let resolved = base.join(relative).ok()?;
    if !resolved.as_str().starts_with(base.as_str()) {
        return None;
    }

    Some(relative.to_string())
}

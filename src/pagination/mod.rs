//! Cursor pagination for Webex list endpoints.

use crate::client::WebexClient;
use crate::decode::ApiEntity;
use crate::errors::{WebexError, WebexResult};
use reqwest::header::{HeaderMap, LINK};

/// Pagination links parsed from the Link header.
#[derive(Debug, Clone, Default)]
pub struct PaginationLinks {
    /// URL for the next page.
    pub next: Option<String>,
    /// URL for the previous page.
    pub prev: Option<String>,
    /// URL for the first page.
    pub first: Option<String>,
}

impl PaginationLinks {
    /// Parses pagination links from the Link header (RFC 8288).
    ///
    /// Commas inside a `<...>` target belong to the URL and do not separate
    /// link values.
    pub fn from_header(header_value: &str) -> Self {
        let mut links = Self::default();

        for part in split_link_values(header_value) {
            let part = part.trim();
            let Some(rest) = part.strip_prefix('<') else {
                continue;
            };
            let Some((url, params)) = rest.split_once('>') else {
                continue;
            };

            let rel = params
                .split(';')
                .filter_map(|param| param.trim().strip_prefix("rel="))
                .map(|value| value.trim_matches('"'))
                .next();

            match rel {
                Some("next") => links.next = Some(url.to_string()),
                Some("prev") => links.prev = Some(url.to_string()),
                Some("first") => links.first = Some(url.to_string()),
                _ => {}
            }
        }

        links
    }

    /// Parses pagination links from response headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(Self::from_header)
            .unwrap_or_default()
    }

    /// Returns true if there is a next page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

fn split_link_values(header_value: &str) -> Vec<&str> {
    let mut values = Vec::new();
    let mut in_target = false;
    let mut start = 0;

    for (i, c) in header_value.char_indices() {
        match c {
            '<' => in_target = true,
            '>' => in_target = false,
            ',' if !in_target => {
                values.push(&header_value[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    values.push(&header_value[start..]);
    values
}

/// A single page of results.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Identifiers that were requested but not found.
    pub not_found_ids: Vec<String>,
    /// Next-page path relative to the base URL.
    next: Option<String>,
    client: Option<WebexClient>,
}

impl<T> Page<T> {
    /// Creates a new page.
    pub fn new(
        items: Vec<T>,
        next: Option<String>,
        not_found_ids: Vec<String>,
        client: Option<WebexClient>,
    ) -> Self {
        Self {
            items,
            not_found_ids,
            next,
            client,
        }
    }

    /// Creates an empty final page.
    pub fn empty(client: Option<WebexClient>) -> Self {
        Self::new(Vec::new(), None, Vec::new(), client)
    }

    /// Returns true if there is a next page.
    pub fn has_next_page(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the cursor for the next page.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Returns the number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consumes the page and returns the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: ApiEntity> Page<T> {
    /// Fetches the page after this one.
    ///
    /// Without a cursor this resolves to an empty page and makes no request.
    pub async fn next_page(&self) -> WebexResult<Page<T>> {
        match (&self.next, &self.client) {
            (None, client) => Ok(Page::empty(client.clone())),
            (Some(cursor), Some(client)) => client.get_page(cursor).await,
            (Some(_), None) => Err(WebexError::unbound(T::OBJECT_TYPE)),
        }
    }

    /// Follows every cursor and collects all items, starting with this page.
    pub async fn collect_all(self) -> WebexResult<Vec<T>> {
        let mut all_items = Vec::new();
        let mut page = self;

        loop {
            let next = if page.has_next_page() {
                Some(page.next_page().await?)
            } else {
                None
            };
            all_items.extend(page.items);

            match next {
                Some(next) => page = next,
                None => return Ok(all_items),
            }
        }
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Team;

    #[test]
    fn test_parse_link_header() {
        let header = r#"<https://webexapis.com/v1/people?cursor=abc>; rel="next""#;
        let links = PaginationLinks::from_header(header);

        assert_eq!(links.next.as_deref(), Some("https://webexapis.com/v1/people?cursor=abc"));
        assert!(links.has_next());
        assert!(links.prev.is_none());
    }

    #[test]
    fn test_parse_multiple_links() {
        let header = r#"<https://webexapis.com/v1/rooms?cursor=1>; rel="first", <https://webexapis.com/v1/rooms?cursor=3>; rel="next""#;
        let links = PaginationLinks::from_header(header);

        assert!(links.first.is_some());
        assert_eq!(links.next.as_deref(), Some("https://webexapis.com/v1/rooms?cursor=3"));
    }

    #[test]
    fn test_parse_link_with_comma_in_url() {
        let header = r#"<https://webexapis.com/v1/people?id=a,b&cursor=xyz>; rel="next""#;
        let links = PaginationLinks::from_header(header);
        assert_eq!(
            links.next.as_deref(),
            Some("https://webexapis.com/v1/people?id=a,b&cursor=xyz")
        );

        let header = r#"<https://webexapis.com/v1/people?id=a,b&cursor=1>; rel="first", <https://webexapis.com/v1/people?id=a,b&cursor=2>; rel="next""#;
        let links = PaginationLinks::from_header(header);
        assert_eq!(
            links.first.as_deref(),
            Some("https://webexapis.com/v1/people?id=a,b&cursor=1")
        );
        assert_eq!(
            links.next.as_deref(),
            Some("https://webexapis.com/v1/people?id=a,b&cursor=2")
        );
    }

    #[test]
    fn test_parse_link_without_next() {
        let links = PaginationLinks::from_header(r#"<https://webexapis.com/v1/rooms?cursor=1>; rel="prev""#);
        assert!(!links.has_next());
    }

    #[test]
    fn test_page_operations() {
        let page: Page<i32> = Page::new(vec![1, 2, 3], None, vec![], None);

        assert_eq!(page.len(), 3);
        assert!(!page.is_empty());
        assert!(!page.has_next_page());
        assert_eq!(page.iter().sum::<i32>(), 6);
        assert_eq!(page.into_items(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_next_page_without_cursor_is_empty() {
        let page: Page<Team> = Page::new(Vec::new(), None, vec![], None);
        let next = page.next_page().await.unwrap();
        assert!(next.is_empty());
        assert!(!next.has_next_page());
    }

    #[tokio::test]
    async fn test_next_page_without_client_fails() {
        let page: Page<Team> = Page::new(Vec::new(), Some("teams?cursor=x".into()), vec![], None);
        let err = page.next_page().await.unwrap_err();
        assert_eq!(err.kind(), crate::errors::WebexErrorKind::UnboundEntity);
    }
}

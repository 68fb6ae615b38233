//! Webex API client implementation.

mod multipart;

pub use multipart::{FileUpload, MultipartBody};

use crate::config::{WebexConfig, WebexConfigBuilder};
use crate::decode::{decode_entity, decode_list, ApiEntity};
use crate::errors::{WebexError, WebexResult};
use crate::observability::{Metrics, MetricsSnapshot, TracingHooks};
use crate::pagination::Page;
use crate::resilience::{parse_retry_after, RetryPolicy};
use crate::services::*;
use crate::types::ResponseMessage;
use bytes::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Request header carrying a per-request tracking identifier.
pub const TRACKING_ID_HEADER: &str = "TrackingID";

/// Body of an outgoing request.
///
/// JSON and multipart are mutually exclusive.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// Serialized JSON document.
    Json(Bytes),
    /// Multipart form with a file attachment.
    Multipart(MultipartBody),
}

impl RequestBody {
    /// Serializes a value as a JSON body; `None` fields are skipped by the
    /// request types themselves.
    pub fn json<B: Serialize>(body: &B) -> WebexResult<Self> {
        serde_json::to_vec(body).map(|b| Self::Json(b.into())).map_err(|e| {
            WebexError::validation(format!("Failed to serialize request body: {}", e))
        })
    }
}

struct ClientInner {
    http: Client,
    config: WebexConfig,
    retry: RetryPolicy,
    metrics: Metrics,
}

/// Webex API client.
///
/// Cloning is cheap; clones share the HTTP pool, configuration and metrics.
/// Every entity the client decodes carries a clone so it can issue further
/// calls about itself.
#[derive(Clone)]
pub struct WebexClient {
    inner: Arc<ClientInner>,
}

impl fmt::Debug for WebexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebexClient")
            .field("base_url", &self.inner.config.base_url)
            .field("authenticated", &self.inner.config.token.is_some())
            .finish()
    }
}

impl WebexClient {
    /// Creates a new Webex client.
    pub fn new(config: WebexConfig) -> WebexResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool.max_idle_per_host)
            .pool_idle_timeout(config.pool.idle_timeout)
            .build()
            .map_err(|e| {
                WebexError::configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let retry = RetryPolicy::from_config(&config.retry);

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                retry,
                metrics: Metrics::new(),
            }),
        })
    }

    /// Creates a new client builder.
    pub fn builder() -> WebexClientBuilder {
        WebexClientBuilder::new()
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.config.base_url
    }

    /// Gets the configuration.
    pub fn config(&self) -> &WebexConfig {
        &self.inner.config
    }

    /// Gets a snapshot of request metrics.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.inner.metrics.snapshot()
    }

    // Service accessors

    /// Gets the rooms service.
    pub fn rooms(&self) -> RoomsService<'_> {
        RoomsService::new(self)
    }

    /// Gets the messages service.
    pub fn messages(&self) -> MessagesService<'_> {
        MessagesService::new(self)
    }

    /// Gets the people service.
    pub fn people(&self) -> PeopleService<'_> {
        PeopleService::new(self)
    }

    /// Gets the memberships service.
    pub fn memberships(&self) -> MembershipsService<'_> {
        MembershipsService::new(self)
    }

    /// Gets the teams service.
    pub fn teams(&self) -> TeamsService<'_> {
        TeamsService::new(self)
    }

    /// Gets the team memberships service.
    pub fn team_memberships(&self) -> TeamMembershipsService<'_> {
        TeamMembershipsService::new(self)
    }

    /// Gets the webhooks service.
    pub fn webhooks(&self) -> WebhooksService<'_> {
        WebhooksService::new(self)
    }

    /// Gets the events service.
    pub fn events(&self) -> EventsService<'_> {
        EventsService::new(self)
    }

    /// Gets the licenses service.
    pub fn licenses(&self) -> LicensesService<'_> {
        LicensesService::new(self)
    }

    /// Gets the roles service.
    pub fn roles(&self) -> RolesService<'_> {
        RolesService::new(self)
    }

    /// Gets the organizations service.
    pub fn organizations(&self) -> OrganizationsService<'_> {
        OrganizationsService::new(self)
    }

    /// Gets the resource groups service.
    pub fn resource_groups(&self) -> ResourceGroupsService<'_> {
        ResourceGroupsService::new(self)
    }

    // Typed operations

    /// GETs a single entity.
    pub async fn get_entity<T: ApiEntity>(&self, path: &str) -> WebexResult<T> {
        let response = self
            .send(Method::GET, path, RequestBody::Empty, T::OBJECT_TYPE)
            .await?;
        let body = read_body(response).await?;
        decode_entity(&body, Some(self))
    }

    /// GETs one page of a list; `path` may be a stored pagination cursor.
    pub async fn get_page<T: ApiEntity>(&self, path: &str) -> WebexResult<Page<T>> {
        let response = self
            .send(Method::GET, path, RequestBody::Empty, T::OBJECT_TYPE)
            .await?;
        let headers = response.headers().clone();
        let body = read_body(response).await?;
        decode_list(&body, &headers, self.base_url(), Some(self))
    }

    /// POSTs a JSON body and decodes the created entity.
    pub async fn post_entity<T: ApiEntity, B: Serialize>(&self, path: &str, body: &B) -> WebexResult<T> {
        let response = self
            .send(Method::POST, path, RequestBody::json(body)?, T::OBJECT_TYPE)
            .await?;
        let body = read_body(response).await?;
        decode_entity(&body, Some(self))
    }

    /// POSTs a multipart form and decodes the created entity.
    pub async fn post_multipart_entity<T: ApiEntity>(
        &self,
        path: &str,
        form: MultipartBody,
    ) -> WebexResult<T> {
        let response = self
            .send(Method::POST, path, RequestBody::Multipart(form), T::OBJECT_TYPE)
            .await?;
        let body = read_body(response).await?;
        decode_entity(&body, Some(self))
    }

    /// PUTs a JSON body and decodes the updated entity.
    pub async fn put_entity<T: ApiEntity, B: Serialize>(&self, path: &str, body: &B) -> WebexResult<T> {
        let response = self
            .send(Method::PUT, path, RequestBody::json(body)?, T::OBJECT_TYPE)
            .await?;
        let body = read_body(response).await?;
        decode_entity(&body, Some(self))
    }

    /// DELETEs a resource; success is normalized to an "OK" message.
    pub async fn delete(&self, path: &str, object_type: &str) -> WebexResult<ResponseMessage> {
        let response = self
            .send(Method::DELETE, path, RequestBody::Empty, object_type)
            .await?;
        Ok(ResponseMessage::ok(response.status().as_u16()))
    }

    /// Sends one request through the retry policy.
    ///
    /// Fails before any I/O when no token is configured. A non-success
    /// response is read and converted into a structured error annotated with
    /// `object_type`, the path and the status code.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        object_type: &str,
    ) -> WebexResult<Response> {
        let token = self
            .inner
            .config
            .token
            .as_ref()
            .ok_or_else(WebexError::missing_token)?;
        let auth_header = token.header_value();
        let url = self.build_url(path);

        let method_name = method.as_str().to_string();
        let this = self;
        let url_ref = url.as_str();
        let auth_ref = auth_header.as_str();
        let body_ref = &body;

        let result = self
            .inner
            .retry
            .execute(move || this.attempt(method.clone(), url_ref, path, auth_ref, body_ref))
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.inner.metrics.record_failure();
                return Err(e.with_request_path(path).with_object_type(object_type));
            }
        };

        let status = response.status();
        if status.is_success() {
            self.inner.metrics.record_success();
            return Ok(response);
        }

        self.inner.metrics.record_failure();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = parse_retry_after(response.headers()).map(|d| d.as_secs());
            return Err(WebexError::rate_limit(path, retry_after).with_object_type(object_type));
        }

        match response.text().await {
            Ok(text) => Err(WebexError::from_response(
                status.as_u16(),
                path,
                &text,
                object_type,
            )),
            Err(e) => {
                TracingHooks::on_request_error(
                    &method_name,
                    path,
                    &format!("failed to read error body: {}", e),
                );
                Err(WebexError::from_response(status.as_u16(), path, "", object_type).with_cause(e))
            }
        }
    }

    async fn attempt(
        &self,
        method: Method,
        url: &str,
        path: &str,
        auth_header: &str,
        body: &RequestBody,
    ) -> WebexResult<Response> {
        let tracking_id = format!("webex_rs_{}", Uuid::new_v4());
        TracingHooks::on_request_start(method.as_str(), path, &tracking_id);
        self.inner.metrics.record_request();
        let started = Instant::now();

        let mut request = self
            .inner
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, auth_header)
            .header(USER_AGENT, &self.inner.config.user_agent)
            .header(ACCEPT, "application/json")
            .header(TRACKING_ID_HEADER, &tracking_id);

        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(bytes) => request
                .header(CONTENT_TYPE, "application/json")
                .body(bytes.clone()),
            RequestBody::Multipart(form) => request.multipart(form.to_form()?),
        };

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                self.inner.metrics.record_latency(started.elapsed());
                if status == StatusCode::TOO_MANY_REQUESTS {
                    self.inner.metrics.record_rate_limited();
                }
                TracingHooks::on_request_complete(
                    method.as_str(),
                    path,
                    status.as_u16(),
                    started.elapsed(),
                );
                Ok(response)
            }
            Err(e) => {
                let error = WebexError::from(e);
                TracingHooks::on_request_error(method.as_str(), path, &error.to_string());
                Err(error)
            }
        }
    }

    /// Resolves a path relative to the base URL.
    pub fn build_url(&self, path: &str) -> String {
        let base = self.inner.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

async fn read_body(response: Response) -> WebexResult<Bytes> {
    response.bytes().await.map_err(WebexError::from)
}

/// Builder for WebexClient.
pub struct WebexClientBuilder {
    config_builder: WebexConfigBuilder,
}

impl WebexClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config_builder: WebexConfig::builder(),
        }
    }

    /// Loads the token and base URL from the environment.
    pub fn from_env(mut self) -> Self {
        self.config_builder = self.config_builder.from_env();
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(url);
        self
    }

    /// Sets the bearer token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.token(token.into());
        self
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(ua);
        self
    }

    /// Sets the retry configuration.
    pub fn retry(mut self, config: crate::config::RetryConfig) -> Self {
        self.config_builder = self.config_builder.retry(config);
        self
    }

    /// Disables retries.
    pub fn no_retry(mut self) -> Self {
        self.config_builder = self.config_builder.no_retry();
        self
    }

    /// Builds the client.
    pub fn build(self) -> WebexResult<WebexClient> {
        let config = self.config_builder.build()?;
        WebexClient::new(config)
    }
}

impl Default for WebexClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WebexErrorKind;

    #[test]
    fn test_build_url() {
        let client = WebexClient::builder().token("test").build().unwrap();

        assert_eq!(client.build_url("/rooms/abc"), "https://webexapis.com/v1/rooms/abc");
        assert_eq!(client.build_url("rooms/abc"), "https://webexapis.com/v1/rooms/abc");
    }

    #[test]
    fn test_client_builder() {
        let result = WebexClient::builder()
            .token("token")
            .user_agent("test-client/1.0")
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn test_debug_hides_token() {
        let client = WebexClient::builder().token("very-secret").build().unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("authenticated: true"));
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_io() {
        let client = WebexClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();

        let err = client
            .send(Method::GET, "rooms", RequestBody::Empty, "Room")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), WebexErrorKind::MissingToken);
        assert_eq!(client.metrics().requests_total, 0);
    }

    #[test]
    fn test_json_body() {
        #[derive(Serialize)]
        struct Body {
            title: &'static str,
        }

        match RequestBody::json(&Body { title: "x" }).unwrap() {
            RequestBody::Json(bytes) => assert_eq!(&bytes[..], br#"{"title":"x"}"#),
            other => panic!("unexpected body {:?}", other),
        }
    }
}

//! Error types for the Webex client.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Result type alias for Webex operations.
pub type WebexResult<T> = Result<T, WebexError>;

/// Error kinds for categorizing Webex errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebexErrorKind {
    // Configuration errors
    /// No bearer token was configured before a call.
    MissingToken,
    /// Invalid base URL.
    InvalidBaseUrl,
    /// Invalid configuration.
    InvalidConfiguration,
    /// Entity-scoped operation on a value with no client attached.
    UnboundEntity,

    // Request errors
    /// A caller-supplied argument violates a documented precondition.
    ValidationFailed,
    /// A caller-supplied collection exceeds a documented API limit.
    OutOfRange,

    // Network errors
    /// Connection failed.
    ConnectionFailed,
    /// Request timeout.
    Timeout,
    /// Any other failure reaching the server.
    Transport,

    // Response errors
    /// Still rate limited after every retry was used.
    RateLimitExceeded,
    /// Non-success HTTP response.
    Api,
    /// Response body did not match the expected shape.
    Decode,
    /// Local file attachment could not be read.
    Attachment,

    // Webhook errors
    /// Notification signature is missing or does not match.
    WebhookSignatureInvalid,
}

impl fmt::Display for WebexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => write!(f, "missing_token"),
            Self::InvalidBaseUrl => write!(f, "invalid_base_url"),
            Self::InvalidConfiguration => write!(f, "invalid_configuration"),
            Self::UnboundEntity => write!(f, "unbound_entity"),
            Self::ValidationFailed => write!(f, "validation_failed"),
            Self::OutOfRange => write!(f, "out_of_range"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::Transport => write!(f, "transport"),
            Self::RateLimitExceeded => write!(f, "rate_limit_exceeded"),
            Self::Api => write!(f, "api_error"),
            Self::Decode => write!(f, "decode_error"),
            Self::Attachment => write!(f, "attachment_error"),
            Self::WebhookSignatureInvalid => write!(f, "webhook_signature_invalid"),
        }
    }
}

/// Error body returned by the Webex API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorDescription>,
    tracking_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorDescription {
    description: Option<String>,
}

/// Webex API error with detailed information.
#[derive(Error, Debug)]
pub struct WebexError {
    /// Error kind.
    kind: WebexErrorKind,
    /// Error message.
    message: String,
    /// HTTP status code.
    status_code: Option<u16>,
    /// Request path relative to the base URL.
    request_path: Option<String>,
    /// Raw response body.
    response_body: Option<String>,
    /// Name of the entity type under operation.
    object_type: Option<String>,
    /// Server-supplied tracking identifier.
    tracking_id: Option<String>,
    /// Retry-After header value in seconds (if present).
    retry_after: Option<u64>,
    /// Underlying cause.
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for WebexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {})", code)?;
        }
        if let Some(ref object_type) = self.object_type {
            write!(f, " [object: {}]", object_type)?;
        }
        if let Some(ref path) = self.request_path {
            write!(f, " [path: {}]", path)?;
        }
        if let Some(ref id) = self.tracking_id {
            write!(f, " [tracking_id: {}]", id)?;
        }
        Ok(())
    }
}

impl WebexError {
    /// Creates a new Webex error.
    pub fn new(kind: WebexErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            request_path: None,
            response_body: None,
            object_type: None,
            tracking_id: None,
            retry_after: None,
            cause: None,
        }
    }

    /// Sets the HTTP status code.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Sets the request path.
    pub fn with_request_path(mut self, path: impl Into<String>) -> Self {
        self.request_path = Some(path.into());
        self
    }

    /// Sets the raw response body.
    pub fn with_response_body(mut self, body: impl Into<String>) -> Self {
        self.response_body = Some(body.into());
        self
    }

    /// Sets the entity type name.
    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    /// Sets the tracking ID.
    pub fn with_tracking_id(mut self, id: impl Into<String>) -> Self {
        self.tracking_id = Some(id.into());
        self
    }

    /// Sets the Retry-After delay in seconds.
    pub fn with_retry_after(mut self, seconds: u64) -> Self {
        self.retry_after = Some(seconds);
        self
    }

    /// Sets the underlying cause.
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Gets the error kind.
    pub fn kind(&self) -> WebexErrorKind {
        self.kind
    }

    /// Gets the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Gets the request path.
    pub fn request_path(&self) -> Option<&str> {
        self.request_path.as_deref()
    }

    /// Gets the raw response body.
    pub fn response_body(&self) -> Option<&str> {
        self.response_body.as_deref()
    }

    /// Gets the entity type name.
    pub fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }

    /// Gets the tracking ID.
    pub fn tracking_id(&self) -> Option<&str> {
        self.tracking_id.as_deref()
    }

    /// Returns the retry-after duration in seconds.
    pub fn retry_after(&self) -> Option<u64> {
        self.retry_after
    }

    /// Returns true if the retry policy may retry this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            WebexErrorKind::ConnectionFailed | WebexErrorKind::Timeout | WebexErrorKind::Transport
        )
    }

    /// Returns true for a 404 API response.
    pub fn is_not_found(&self) -> bool {
        self.kind == WebexErrorKind::Api && self.status_code == Some(404)
    }

    /// Creates a structured API error from a non-success response.
    ///
    /// The body is parsed as a Webex error document; when it is not JSON the
    /// whole body becomes the message.
    pub fn from_response(status: u16, path: &str, body: &str, object_type: &str) -> Self {
        let mut error = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => {
                let message = parsed
                    .message
                    .or_else(|| parsed.errors.into_iter().find_map(|e| e.description))
                    .unwrap_or_else(|| format!("HTTP {} error", status));
                let mut error = Self::new(WebexErrorKind::Api, message);
                if let Some(id) = parsed.tracking_id {
                    error = error.with_tracking_id(id);
                }
                error
            }
            Err(_) if body.trim().is_empty() => {
                Self::new(WebexErrorKind::Api, format!("HTTP {} error", status))
            }
            Err(_) => Self::new(WebexErrorKind::Api, body),
        };

        error.status_code = Some(status);
        error
            .with_request_path(path)
            .with_response_body(body)
            .with_object_type(object_type)
    }

    // Convenience constructors

    /// Creates a missing token error.
    pub fn missing_token() -> Self {
        Self::new(
            WebexErrorKind::MissingToken,
            "A bearer token must be configured before calling the API",
        )
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(WebexErrorKind::InvalidConfiguration, message)
    }

    /// Creates an error for an entity that carries no client.
    pub fn unbound(object_type: &str) -> Self {
        Self::new(
            WebexErrorKind::UnboundEntity,
            format!("{} is not attached to a client", object_type),
        )
        .with_object_type(object_type)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(WebexErrorKind::ValidationFailed, message)
    }

    /// Creates an out-of-range error.
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(WebexErrorKind::OutOfRange, message)
    }

    /// Creates a rate limit error.
    pub fn rate_limit(path: &str, retry_after: Option<u64>) -> Self {
        let mut error = Self::new(
            WebexErrorKind::RateLimitExceeded,
            "Rate limit exceeded after retries",
        )
        .with_status(429)
        .with_request_path(path);
        if let Some(seconds) = retry_after {
            error = error.with_retry_after(seconds);
        }
        error
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(WebexErrorKind::Timeout, message)
    }

    /// Creates a generic transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(WebexErrorKind::Transport, message)
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(WebexErrorKind::Decode, message)
    }
}

impl From<reqwest::Error> for WebexError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            WebexErrorKind::Timeout
        } else if e.is_connect() {
            WebexErrorKind::ConnectionFailed
        } else {
            WebexErrorKind::Transport
        };
        Self::new(kind, format!("Request failed: {}", e)).with_cause(e)
    }
}

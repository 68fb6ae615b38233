//! Retry policy for rate-limited and failed sends.

use crate::config::RetryConfig;
use crate::errors::{WebexError, WebexResult};
use crate::observability::TracingHooks;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// A response the retry policy can inspect for rate limiting.
pub trait RateLimited {
    /// HTTP status of the response.
    fn status_code(&self) -> StatusCode;

    /// Server-requested delay before the next attempt.
    fn retry_after(&self) -> Option<Duration>;
}

impl RateLimited for reqwest::Response {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn retry_after(&self) -> Option<Duration> {
        parse_retry_after(self.headers())
    }
}

/// Reads a `Retry-After` delta in seconds.
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Retry executor that honors `429 Too Many Requests`.
///
/// Each attempt either yields a response or a transport error. A 429 response
/// or a retryable error sleeps for `Retry-After` (zero when absent) plus the
/// configured padding, then tries again. Any other response is handed back
/// untouched. Once the retries are used up, the last response or error is
/// surfaced to the caller.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    padding: Duration,
}

impl RetryPolicy {
    /// Creates a new retry policy.
    pub fn new(max_retries: u32, padding: Duration) -> Self {
        Self {
            max_retries,
            padding,
        }
    }

    /// A policy that sends exactly once.
    pub fn disabled() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Builds the policy from client configuration.
    pub fn from_config(config: &RetryConfig) -> Self {
        if config.enabled {
            Self::new(config.max_retries, config.padding)
        } else {
            Self::disabled()
        }
    }

    /// Maximum retries after the first attempt.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Executes an operation with retry logic.
    pub async fn execute<F, Fut, R>(&self, mut operation: F) -> WebexResult<R>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = WebexResult<R>>,
        R: RateLimited,
    {
        let mut retries = 0;

        loop {
            let outcome = operation().await;

            let delay = match &outcome {
                Ok(response) if response.status_code() == StatusCode::TOO_MANY_REQUESTS => {
                    Some(response.retry_after().unwrap_or(Duration::ZERO))
                }
                Err(e) if e.is_retryable() => Some(Duration::ZERO),
                _ => None,
            };

            let Some(delay) = delay else {
                return outcome;
            };
            if retries >= self.max_retries {
                return outcome;
            }
            retries += 1;

            let wait = delay + self.padding;
            TracingHooks::on_retry(retries, wait, outcome.as_ref().err().map(WebexError::to_string));
            sleep(wait).await;
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

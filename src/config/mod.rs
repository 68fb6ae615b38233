//! Configuration types for the Webex client.

use crate::auth::BearerToken;
use crate::errors::{WebexError, WebexErrorKind};
use std::time::Duration;

/// Default Webex API base URL.
pub const DEFAULT_BASE_URL: &str = "https://webexapis.com/v1";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = "integrations-webex/0.1.0";

/// Environment variable holding the access token.
pub const ENV_ACCESS_TOKEN: &str = "WEBEX_ACCESS_TOKEN";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "WEBEX_BASE_URL";

/// Retry configuration for rate-limited and failed sends.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Added to every server-requested delay.
    pub padding: Duration,
    /// Enable retries.
    pub enabled: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            padding: Duration::from_secs(1),
            enabled: true,
        }
    }
}

/// Connection pool configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum idle connections per host.
    pub max_idle_per_host: usize,
    /// Idle connection timeout.
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 20,
            idle_timeout: Duration::from_secs(90),
        }
    }
}

/// Webex client configuration.
#[derive(Debug, Clone)]
pub struct WebexConfig {
    /// API base URL.
    pub base_url: String,
    /// Bearer token.
    pub token: Option<BearerToken>,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
    /// Retry configuration.
    pub retry: RetryConfig,
    /// Connection pool configuration.
    pub pool: PoolConfig,
}

impl Default for WebexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            retry: RetryConfig::default(),
            pool: PoolConfig::default(),
        }
    }
}

impl WebexConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> WebexConfigBuilder {
        WebexConfigBuilder::new()
    }

    /// Validates the configuration.
    ///
    /// A missing token is not a configuration error here; it is reported by
    /// the first call that needs it.
    pub fn validate(&self) -> Result<(), WebexError> {
        if self.base_url.is_empty() {
            return Err(WebexError::new(
                WebexErrorKind::InvalidBaseUrl,
                "Base URL cannot be empty",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(WebexError::new(
                WebexErrorKind::InvalidBaseUrl,
                "Base URL must start with http:// or https://",
            ));
        }

        url::Url::parse(&self.base_url).map_err(|e| {
            WebexError::new(
                WebexErrorKind::InvalidBaseUrl,
                format!("Base URL is not a valid URL: {}", e),
            )
        })?;

        if self.user_agent.is_empty() {
            return Err(WebexError::configuration("User-Agent cannot be empty"));
        }

        Ok(())
    }
}

/// Builder for WebexConfig.
#[derive(Debug, Default)]
pub struct WebexConfigBuilder {
    base_url: Option<String>,
    token: Option<BearerToken>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    retry: Option<RetryConfig>,
    pool: Option<PoolConfig>,
}

impl WebexConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the token and base URL override from the environment.
    ///
    /// Values already set on the builder are replaced only when the
    /// corresponding variable is present.
    pub fn from_env(mut self) -> Self {
        if let Ok(token) = std::env::var(ENV_ACCESS_TOKEN) {
            if !token.trim().is_empty() {
                self.token = Some(BearerToken::new(token));
            }
        }
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.trim().is_empty() {
                self.base_url = Some(url);
            }
        }
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the bearer token.
    pub fn token(mut self, token: impl Into<BearerToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the retry configuration.
    pub fn retry(mut self, config: RetryConfig) -> Self {
        self.retry = Some(config);
        self
    }

    /// Disables retries.
    pub fn no_retry(mut self) -> Self {
        self.retry = Some(RetryConfig {
            enabled: false,
            ..Default::default()
        });
        self
    }

    /// Sets the connection pool configuration.
    pub fn pool(mut self, config: PoolConfig) -> Self {
        self.pool = Some(config);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<WebexConfig, WebexError> {
        let config = WebexConfig {
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token: self.token.filter(|t| !t.is_empty()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            retry: self.retry.unwrap_or_default(),
            pool: self.pool.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}

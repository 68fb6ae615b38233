//! Environment configuration. Kept in its own binary since it mutates
//! process environment variables.

use integrations_webex::config::{DEFAULT_BASE_URL, ENV_ACCESS_TOKEN, ENV_BASE_URL};
use integrations_webex::{WebexClient, WebexConfig, WebexErrorKind};

#[test]
fn test_from_env() {
    std::env::remove_var(ENV_ACCESS_TOKEN);
    std::env::remove_var(ENV_BASE_URL);

    let config = WebexConfig::builder().from_env().build().unwrap();
    assert!(config.token.is_none());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);

    std::env::set_var(ENV_ACCESS_TOKEN, "env-token");
    std::env::set_var(ENV_BASE_URL, "https://webex.example.com/v1");

    let client = WebexClient::builder().from_env().build().unwrap();
    assert_eq!(client.base_url(), "https://webex.example.com/v1");
    assert!(client.config().token.is_some());

    std::env::set_var(ENV_BASE_URL, "ftp://nope");
    let err = WebexConfig::builder().from_env().build().unwrap_err();
    assert_eq!(err.kind(), WebexErrorKind::InvalidBaseUrl);

    std::env::remove_var(ENV_ACCESS_TOKEN);
    std::env::remove_var(ENV_BASE_URL);
}

//! Bearer token authentication for the Webex API.

use secrecy::{ExposeSecret, SecretString};

/// Bearer token supplied by the embedding application.
///
/// There is no refresh flow; the token is used as-is for every request.
#[derive(Debug, Clone)]
pub struct BearerToken(SecretString);

impl BearerToken {
    /// Wraps a raw access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    /// Returns true if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().trim().is_empty()
    }

    /// Builds the `Authorization` header value.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }
}

impl From<&str> for BearerToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for BearerToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value() {
        let token = BearerToken::new("abc123");
        assert_eq!(token.header_value(), "Bearer abc123");
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = BearerToken::new("super-secret");
        assert!(!format!("{:?}", token).contains("super-secret"));
    }

    #[test]
    fn test_empty_token() {
        assert!(BearerToken::new("  ").is_empty());
        assert!(!BearerToken::from("t").is_empty());
    }
}

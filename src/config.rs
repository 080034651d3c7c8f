/// Connection settings, validated before any request is made.
use std::time::Duration;

use crate::wiki::WikiError;

/// Default server base URL.
pub const DEFAULT_URL: &str = "http://localhost:3000";

/// Validated connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server base URL, without the `/graphql` suffix.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub token: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Build settings from CLI/environment values.
    ///
    /// # Errors
    ///
    /// Returns `WikiError::MissingToken` if the token is absent or blank.
    pub fn new(base_url: &str, token: Option<&str>, timeout_secs: u64) -> Result<Self, WikiError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(WikiError::MissingToken)?;
        Ok(Self {
            base_url: base_url.to_owned(),
            token: token.to_owned(),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_fatal() {
        assert!(matches!(
            Config::new(DEFAULT_URL, None, 30),
            Err(WikiError::MissingToken)
        ));
        assert!(matches!(
            Config::new(DEFAULT_URL, Some("   "), 30),
            Err(WikiError::MissingToken)
        ));
    }

    #[test]
    fn test_valid_config() {
        let cfg = Config::new("https://wiki.example.com", Some("abc"), 30).unwrap();
        assert_eq!(cfg.token, "abc");
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }
}

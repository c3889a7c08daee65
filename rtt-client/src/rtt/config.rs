//! Client configuration.

use std::fmt;

use super::error::RttError;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.rtt.io/api/v1";

/// Environment variable holding the API username.
pub const USERNAME_VAR: &str = "RTT_USERNAME";

/// Environment variable holding the API password.
pub const PASSWORD_VAR: &str = "RTT_PASSWORD";

/// Optional environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_VAR: &str = "RTT_BASE_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP Basic credentials for the API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Configuration for the RTT client.
#[derive(Debug, Clone)]
pub struct RttConfig {
    /// Credentials sent with every request
    pub credentials: Credentials,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RttConfig {
    /// Create a new config with the given credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read credentials (and optionally the base URL) from the environment.
    pub fn from_env() -> Result<Self, RttError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RttError> {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let missing = |name: &str| RttError::Config(format!("{name} is not set"));

        let username = var(USERNAME_VAR).ok_or_else(|| missing(USERNAME_VAR))?;
        let password = var(PASSWORD_VAR).ok_or_else(|| missing(PASSWORD_VAR))?;

        let config = Self::new(username, password);
        Ok(match var(BASE_URL_VAR) {
            Some(base_url) => config.with_base_url(base_url),
            None => config,
        })
    }

    /// Set a custom base URL (for testing or a mirror).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn config_defaults() {
        let config = RttConfig::new("user", "secret");

        assert_eq!(config.credentials.username(), "user");
        assert_eq!(config.credentials.password(), "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = RttConfig::new("user", "secret")
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn debug_redacts_password() {
        let config = RttConfig::new("user", "secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("user"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn from_lookup_reads_credentials() {
        let config = RttConfig::from_lookup(lookup(&[
            ("RTT_USERNAME", "rttapi_user"),
            ("RTT_PASSWORD", "hunter2"),
        ]))
        .unwrap();

        assert_eq!(config.credentials, Credentials::new("rttapi_user", "hunter2"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn from_lookup_base_url_override() {
        let config = RttConfig::from_lookup(lookup(&[
            ("RTT_USERNAME", "u"),
            ("RTT_PASSWORD", "p"),
            ("RTT_BASE_URL", "http://127.0.0.1:9000/api/v1"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:9000/api/v1");
    }

    #[test]
    fn from_lookup_missing_or_empty_credentials() {
        let err = RttConfig::from_lookup(lookup(&[("RTT_PASSWORD", "p")])).unwrap_err();
        assert_eq!(err.to_string(), "configuration error: RTT_USERNAME is not set");

        let err =
            RttConfig::from_lookup(lookup(&[("RTT_USERNAME", "u"), ("RTT_PASSWORD", "")]))
                .unwrap_err();
        assert_eq!(err.to_string(), "configuration error: RTT_PASSWORD is not set");
    }
}

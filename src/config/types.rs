//! Configuration types.
//!
//! This module defines the client configuration record and the log output format.

use std::time::Duration;

use log::debug;
use reqwest::header::HeaderMap;

use crate::config::constants::{API_BASE_URL_ENV, DEFAULT_API_BASE_URL, REQUEST_TIMEOUT};
use crate::config::headers::default_headers;

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    #[default]
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Resolves the base URL from an optional override.
///
/// Returns the override when it is present and non-empty, otherwise
/// [`DEFAULT_API_BASE_URL`]. The override is not validated or trimmed.
pub fn resolve_base_url(value: Option<String>) -> String {
    match value {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_API_BASE_URL.to_string(),
    }
}

/// Immutable configuration applied to every request of a client.
///
/// Holds the base URL, the request timeout, and the default headers. Only the
/// base URL varies; the timeout and headers are fixed.
///
/// # Examples
///
/// ```
/// use api_client::config::ClientConfig;
///
/// let config = ClientConfig::new("https://api.example.com/v1");
/// assert_eq!(config.base_url(), "https://api.example.com/v1");
/// assert_eq!(config.timeout_ms(), 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    default_headers: HeaderMap,
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with the fixed timeout and headers.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: REQUEST_TIMEOUT,
            default_headers: default_headers(),
        }
    }

    /// Resolves the configuration from the process environment.
    ///
    /// Reads `API_BASE_URL` once. A value that is not valid Unicode is treated
    /// as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration against an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = lookup(API_BASE_URL_ENV);
        if !matches!(value.as_deref(), Some(url) if !url.is_empty()) {
            debug!(
                "{} not set, using default base URL {}",
                API_BASE_URL_ENV, DEFAULT_API_BASE_URL
            );
        }
        Self::new(resolve_base_url(value))
    }

    /// Root URL prepended to relative request paths.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Timeout in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }

    /// Headers sent with every request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    #[cfg(test)]
    pub(crate) fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONTENT_TYPE_JSON, HEADER_CONTENT_TYPE, REQUEST_TIMEOUT_MS};

    fn lookup_with(value: Option<&str>) -> impl Fn(&str) -> Option<String> {
        let value = value.map(str::to_string);
        move |key: &str| {
            assert_eq!(key, API_BASE_URL_ENV, "Only API_BASE_URL should be read");
            value.clone()
        }
    }

    #[test]
    fn test_resolve_base_url_unset_uses_default() {
        assert_eq!(resolve_base_url(None), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_resolve_base_url_empty_uses_default() {
        assert_eq!(resolve_base_url(Some(String::new())), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_resolve_base_url_override() {
        assert_eq!(
            resolve_base_url(Some("https://api.example.com/v1".to_string())),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn test_resolve_base_url_is_not_validated() {
        // Malformed and whitespace-only values are passed through untouched
        assert_eq!(resolve_base_url(Some("not a url".to_string())), "not a url");
        assert_eq!(resolve_base_url(Some("  ".to_string())), "  ");
    }

    #[test]
    fn test_from_lookup_scenarios() {
        assert_eq!(
            ClientConfig::from_lookup(lookup_with(None)).base_url(),
            "http://localhost:3000/api"
        );
        assert_eq!(
            ClientConfig::from_lookup(lookup_with(Some("https://api.example.com/v1"))).base_url(),
            "https://api.example.com/v1"
        );
        assert_eq!(
            ClientConfig::from_lookup(lookup_with(Some(""))).base_url(),
            "http://localhost:3000/api"
        );
    }

    #[test]
    fn test_timeout_and_headers_fixed_regardless_of_environment() {
        for value in [None, Some(""), Some("https://api.example.com/v1")] {
            let config = ClientConfig::from_lookup(lookup_with(value));
            assert_eq!(config.timeout_ms(), REQUEST_TIMEOUT_MS);
            assert_eq!(config.timeout(), Duration::from_millis(10_000));
            assert_eq!(config.default_headers().len(), 1);
            assert_eq!(
                config
                    .default_headers()
                    .get(HEADER_CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok()),
                Some(CONTENT_TYPE_JSON)
            );
        }
    }

    #[test]
    fn test_default_matches_fallback() {
        assert_eq!(
            ClientConfig::default(),
            ClientConfig::from_lookup(lookup_with(None))
        );
    }

    #[test]
    fn test_from_env_reads_api_base_url() {
        // The only test in this binary that touches API_BASE_URL
        std::env::remove_var(API_BASE_URL_ENV);
        assert_eq!(ClientConfig::from_env().base_url(), DEFAULT_API_BASE_URL);

        std::env::set_var(API_BASE_URL_ENV, "");
        assert_eq!(ClientConfig::from_env().base_url(), DEFAULT_API_BASE_URL);

        std::env::set_var(API_BASE_URL_ENV, "https://api.example.com/v1");
        assert_eq!(
            ClientConfig::from_env().base_url(),
            "https://api.example.com/v1"
        );

        std::env::remove_var(API_BASE_URL_ENV);
    }

    #[test]
    fn test_log_format_default_is_plain() {
        assert_eq!(LogFormat::default(), LogFormat::Plain);
    }
}

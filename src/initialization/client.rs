//! HTTP client initialization.
//!
//! This module builds the underlying `reqwest::Client` from a `ClientConfig`.

use log::debug;
use reqwest::ClientBuilder;

use crate::config::ClientConfig;

/// Initializes the HTTP client from a client configuration.
///
/// Creates a `reqwest::Client` configured with:
/// - Timeout from the configuration (applies to the whole request)
/// - Default headers from the configuration
///
/// # Arguments
///
/// * `config` - Resolved client configuration
///
/// # Returns
///
/// A configured HTTP client ready for making requests.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails (TLS backend
/// initialization).
pub fn init_client(config: &ClientConfig) -> Result<reqwest::Client, reqwest::Error> {
    debug!(
        "Building HTTP client: timeout={}ms, default headers={:?}",
        config.timeout_ms(),
        config.default_headers()
    );
    ClientBuilder::new()
        .timeout(config.timeout())
        .default_headers(config.default_headers().clone())
        .build()
}

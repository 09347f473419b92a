//! Configuration constants.
//!
//! This module defines the constants the shared client is built from: where the
//! base URL comes from, its fallback, and the request timeout.

use std::time::Duration;

/// Environment variable that overrides the base URL.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Base URL used when `API_BASE_URL` is unset or empty.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Request timeout in milliseconds (10 seconds)
/// Covers the whole request: connect, send, and reading the response body.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Request timeout as a `Duration`.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(REQUEST_TIMEOUT_MS);

//! Client configuration and constants.
//!
//! This module provides:
//! - Configuration constants (environment variable, fallback base URL, timeout)
//! - Default HTTP headers
//! - The `ClientConfig` record and its one-shot environment loading

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{resolve_base_url, ClientConfig, LogFormat};

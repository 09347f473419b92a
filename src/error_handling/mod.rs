//! Error handling.
//!
//! This module provides:
//! - Initialization error types (logger, HTTP client)
//! - Request failure categories and the categorization of `reqwest` errors
//!
//! This crate never retries or recovers; categorization is offered to the
//! caller's request layer.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{InitializationError, RequestErrorKind};

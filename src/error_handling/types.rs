//! Error type definitions.
//!
//! This module defines the initialization errors and the request failure
//! categories used throughout the crate.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{AsRefStr, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Categories of failures a request issued through the client can hit.
///
/// Produced by [`categorize_reqwest_error`](crate::error_handling::categorize_reqwest_error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum RequestErrorKind {
    /// The request could not be built (e.g. unparsable URL).
    Builder,
    /// Redirect policy violated (loop or too many hops).
    Redirect,
    /// Response carried an error status (from `error_for_status`).
    Status,
    /// The request exceeded the client timeout.
    Timeout,
    /// Could not connect to the server.
    Connect,
    /// Any other failure while sending the request.
    Request,
    /// Failure while reading or writing a body.
    Body,
    /// Response body could not be decoded.
    Decode,
    /// Anything else.
    Other,
}

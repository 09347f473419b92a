//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP client (timeout and default headers)
//! - Logger (optional, for applications without one)

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::{init_logger_with, logger_builder};

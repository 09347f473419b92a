//! api_client library: a shared, pre-configured HTTP client
//!
//! This library provides one process-wide HTTP client whose base URL comes from
//! the `API_BASE_URL` environment variable (falling back to
//! `http://localhost:3000/api`), with a 10 second timeout and a
//! `Content-Type: application/json` default header applied to every request.
//!
//! # Example
//!
//! ```no_run
//! use api_client::shared_client;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = shared_client()?;
//! let response = client.get("/health").send().await?;
//! println!("{} -> {}", client.url("/health"), response.status());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Sending requests requires a Tokio runtime. Building the client does not.

#![warn(missing_docs)]

mod client;
pub mod config;
pub mod error_handling;
pub mod initialization;

// Re-export public API
pub use client::{build_url, combine_urls, is_absolute_url, shared_client, ApiClient};
pub use config::{ClientConfig, LogFormat};
pub use error_handling::{categorize_reqwest_error, InitializationError, RequestErrorKind};

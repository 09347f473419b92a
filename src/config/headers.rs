//! HTTP header constants.
//!
//! This module defines the headers applied to every request issued through the
//! shared client.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

/// Content-Type header name, as it appears on the wire.
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

/// JSON media type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Builds the headers sent with every request.
///
/// Currently a single entry: `Content-Type: application/json`.
/// To add/remove a default header, modify this function.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
    headers
}

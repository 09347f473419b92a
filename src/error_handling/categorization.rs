//! Error categorization.
//!
//! This module maps transport errors onto [`RequestErrorKind`].

use super::types::RequestErrorKind;

/// Categorizes a `reqwest::Error` into a `RequestErrorKind`.
///
/// A request that outlives the client timeout is reported as
/// `RequestErrorKind::Timeout`, even though reqwest also flags it as a request
/// error. Connection failures are checked before generic request failures for
/// the same reason.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `RequestErrorKind` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> RequestErrorKind {
    if error.is_builder() {
        RequestErrorKind::Builder
    } else if error.is_redirect() {
        RequestErrorKind::Redirect
    } else if error.is_status() {
        RequestErrorKind::Status
    } else if error.is_timeout() {
        RequestErrorKind::Timeout
    } else if error.is_connect() {
        RequestErrorKind::Connect
    } else if error.is_request() {
        RequestErrorKind::Request
    } else if error.is_body() {
        RequestErrorKind::Body
    } else if error.is_decode() {
        RequestErrorKind::Decode
    } else {
        RequestErrorKind::Other
    }
}

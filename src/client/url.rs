//! Request URL construction.
//!
//! Relative request paths are appended to the base URL; absolute URLs bypass it.

use std::sync::LazyLock;

use regex::Regex;

/// Scheme followed by `//`, or a protocol-relative `//`.
const ABSOLUTE_URL_PATTERN: &str = r"(?i)^([a-z][a-z\d+\-.]*:)?//";

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static ABSOLUTE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ABSOLUTE_URL_PATTERN, "ABSOLUTE_URL_RE"));

/// Returns `true` if `url` carries its own scheme or is protocol-relative.
pub fn is_absolute_url(url: &str) -> bool {
    ABSOLUTE_URL_RE.is_match(url)
}

/// Joins a base URL and a relative path with a `/` separator.
///
/// Up to two trailing `/` are removed from `base_url`, all leading `/` from
/// `path`. An empty `path` yields `base_url` unchanged.
pub fn combine_urls(base_url: &str, path: &str) -> String {
    if path.is_empty() {
        return base_url.to_string();
    }
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Builds the full request URL for `path` against `base_url`.
///
/// # Arguments
///
/// * `base_url` - Root URL of the client (may be empty)
/// * `path` - Relative path or absolute URL of the request
///
/// # Returns
///
/// `path` unchanged if it is absolute or the base URL is empty, otherwise the
/// combination of both.
pub fn build_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() || is_absolute_url(path) {
        path.to_string()
    } else {
        combine_urls(base_url, path)
    }
}

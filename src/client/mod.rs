//! The pre-configured API client.
//!
//! `ApiClient` pairs an immutable [`ClientConfig`] with the `reqwest::Client`
//! built from it. Every request issued through it targets the base URL and
//! carries the configured timeout and default headers.

mod shared;
mod url;

use std::time::Duration;

use log::info;
use reqwest::header::HeaderMap;
use reqwest::{Method, RequestBuilder};

use crate::config::ClientConfig;
use crate::error_handling::InitializationError;
use crate::initialization::init_client;

pub use self::url::{build_url, combine_urls, is_absolute_url};
pub use shared::shared_client;

/// HTTP client bound to a base URL, timeout, and default headers.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Examples
///
/// ```no_run
/// use api_client::{ApiClient, ClientConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(ClientConfig::new("https://api.example.com/v1"))?;
/// let response = client.get("/users/42").send().await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl ApiClient {
    /// Builds a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the underlying
    /// `reqwest::Client` cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, InitializationError> {
        let http = init_client(&config)?;
        info!(
            "API client ready: base_url={}, timeout={}ms",
            config.base_url(),
            config.timeout_ms()
        );
        Ok(Self { config, http })
    }

    /// Builds a client from the configuration resolved from the environment.
    pub fn from_env() -> Result<Self, InitializationError> {
        Self::new(ClientConfig::from_env())
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Root URL prepended to relative request paths.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    /// Headers sent with every request.
    pub fn default_headers(&self) -> &HeaderMap {
        self.config.default_headers()
    }

    /// The underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Full request URL for `path`; see [`build_url`].
    pub fn url(&self, path: &str) -> String {
        build_url(self.config.base_url(), path)
    }

    /// Starts a request with `method` against `path`.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Starts a `GET` request against `path`.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    /// Starts a `POST` request against `path`.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    /// Starts a `PUT` request against `path`.
    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    /// Starts a `PATCH` request against `path`.
    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    /// Starts a `DELETE` request against `path`.
    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Starts a `HEAD` request against `path`.
    pub fn head(&self, path: &str) -> RequestBuilder {
        self.request(Method::HEAD, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::{categorize_reqwest_error, RequestErrorKind};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_accessors_reflect_config() {
        let client =
            ApiClient::new(ClientConfig::new("https://api.example.com/v1")).expect("client");
        assert_eq!(client.base_url(), "https://api.example.com/v1");
        assert_eq!(client.timeout(), Duration::from_millis(10_000));
        assert_eq!(client.default_headers().len(), 1);
        assert_eq!(client.config(), &ClientConfig::new("https://api.example.com/v1"));
    }

    #[test]
    fn test_request_builder_targets_base_url() {
        let client = ApiClient::new(ClientConfig::default()).expect("client");
        let request = client.post("/users").build().expect("request");
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:3000/api/users");
    }

    #[test]
    fn test_request_builder_absolute_url() {
        let client = ApiClient::new(ClientConfig::default()).expect("client");
        let request = client
            .get("https://other.example.com/health")
            .build()
            .expect("request");
        assert_eq!(request.url().as_str(), "https://other.example.com/health");
    }

    #[tokio::test]
    async fn test_request_exceeding_timeout_fails_with_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/slow"))
            .respond_with(
                ResponseTemplate::new(200).set_delay(std::time::Duration::from_millis(1500)),
            )
            .mount(&mock_server)
            .await;

        let config = ClientConfig::new(format!("{}/api", mock_server.uri()))
            .with_timeout(Duration::from_millis(200));
        let client = ApiClient::new(config).expect("client");

        let error = client
            .get("/slow")
            .send()
            .await
            .expect_err("Delayed response should time out");
        assert!(error.is_timeout());
        assert_eq!(categorize_reqwest_error(&error), RequestErrorKind::Timeout);
    }

    #[tokio::test]
    async fn test_error_status_is_categorized() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client =
            ApiClient::new(ClientConfig::new(format!("{}/api", mock_server.uri()))).expect("client");
        let response = client.get("missing").send().await.expect("response");
        assert_eq!(response.status().as_u16(), 404);

        let error = response
            .error_for_status()
            .expect_err("404 should be an error status");
        assert_eq!(categorize_reqwest_error(&error), RequestErrorKind::Status);
    }
}

//! Process-wide shared client.

use once_cell::sync::OnceCell;

use super::ApiClient;
use crate::error_handling::InitializationError;

static SHARED_CLIENT: OnceCell<ApiClient> = OnceCell::new();

/// Returns the process-wide client, building it on first access.
///
/// The first call resolves the configuration from the environment
/// (`API_BASE_URL`, falling back to the default base URL) and builds the
/// client. Every later call returns the same instance; the environment is not
/// read again. Threads racing on the first call block until the single build
/// finishes, so the client is constructed exactly once.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the underlying
/// `reqwest::Client` cannot be built. Nothing is stored in that case, so a
/// later call retries the build.
pub fn shared_client() -> Result<&'static ApiClient, InitializationError> {
    SHARED_CLIENT.get_or_try_init(ApiClient::from_env)
}

use super::errors::ClientError;
use crate::domain::config::value_objects::ApiKey;

/// Service port for constructing an OpenAI-compatible API client.
///
/// Implementations must not perform network I/O; failing to initialise the
/// underlying client library is reported as
/// [`ClientError::DependencyUnavailable`].
pub trait ClientFactory: Send + Sync {
    type Client;

    fn create(&self, api_key: &ApiKey, base_url: &str) -> Result<Self::Client, ClientError>;
}

use business::domain::client::errors::ClientError;
use business::domain::client::services::ClientFactory;
use business::domain::config::value_objects::ApiKey;

use crate::client::NebiusClient;

pub struct NebiusClientFactory;

impl ClientFactory for NebiusClientFactory {
    type Client = NebiusClient;

    fn create(&self, api_key: &ApiKey, base_url: &str) -> Result<NebiusClient, ClientError> {
        NebiusClient::new(api_key, base_url)
            .map_err(|err| ClientError::DependencyUnavailable(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_client_bound_to_given_base_url() {
        // Arrange
        let factory = NebiusClientFactory;
        let api_key = ApiKey::new("abc123xyz").unwrap();

        // Act
        let client = factory
            .create(&api_key, "https://api.studio.nebius.com/v1")
            .unwrap();

        // Assert
        assert_eq!(client.api_key, "abc123xyz");
        assert_eq!(client.base_url, "https://api.studio.nebius.com/v1");
    }
}

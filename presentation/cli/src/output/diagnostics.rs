use business::domain::client::errors::ClientError;
use business::domain::config::errors::ConfigError;
use business::domain::config::model::API_KEY_VAR;

use crate::error::CliError;

const API_KEY_URL: &str = "https://studio.nebius.com/";
const VISION_MODELS_URL: &str = "https://tokenfactory.nebius.com/?modality=image2text";
const IMAGE_MODELS_URL: &str = "https://tokenfactory.nebius.com/?modality=text2image";

/// Human-readable, multi-line explanation of a failure, for stderr.
pub fn render(error: &CliError) -> String {
    match error {
        CliError::Config(ConfigError::MissingApiKey)
        | CliError::Client(ClientError::Config(ConfigError::MissingApiKey)) => missing_api_key(),
        CliError::Client(ClientError::DependencyUnavailable(reason)) => {
            dependency_unavailable(reason)
        }
    }
}

fn missing_api_key() -> String {
    format!(
        "\n✗ Error: {var} not found!\n\
         \n\
         Set it in your shell profile (e.g. ~/.zshrc) or in a .env file:\n\
         \x20  export {var}='your-api-key'\n\
         \n\
         Get your API key at: {API_KEY_URL}\n\
         \n\
         Available models:\n\
         \x20  Vision: {VISION_MODELS_URL}\n\
         \x20  Image Gen: {IMAGE_MODELS_URL}\n",
        var = API_KEY_VAR,
    )
}

fn dependency_unavailable(reason: &str) -> String {
    format!(
        "\n✗ Error: HTTP client library (reqwest) could not be initialised!\n\
         \x20  Cause: {reason}\n\
         \x20  Make sure the system TLS library (OpenSSL) is installed, then rebuild.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_explain_how_to_set_missing_api_key() {
        // Arrange
        let error = CliError::Config(ConfigError::MissingApiKey);

        // Act
        let message = render(&error);

        // Assert
        assert!(message.contains("NEBIUS_API_KEY not found"));
        assert!(message.contains("export NEBIUS_API_KEY='your-api-key'"));
        assert!(message.contains("https://studio.nebius.com/"));
        assert!(message.lines().count() > 3);
    }

    #[test]
    fn should_render_same_message_for_missing_key_from_client_build() {
        let direct = render(&CliError::Config(ConfigError::MissingApiKey));
        let via_client = render(&CliError::Client(ClientError::Config(
            ConfigError::MissingApiKey,
        )));

        assert_eq!(direct, via_client);
    }

    #[test]
    fn should_name_dependency_when_client_library_unavailable() {
        let error = CliError::Client(ClientError::DependencyUnavailable(
            "no TLS backend".to_string(),
        ));

        let message = render(&error);

        assert!(message.contains("reqwest"));
        assert!(message.contains("no TLS backend"));
    }
}

use std::time::Duration;

use reqwest::Client;

use business::domain::config::value_objects::ApiKey;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI-compatible HTTP client for Nebius AI Studio.
pub struct NebiusClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl NebiusClient {
    /// Builds the underlying HTTP client. No request is sent.
    ///
    /// # Errors
    /// Returns the `reqwest` error if the HTTP/TLS backend cannot be initialised.
    pub fn new(api_key: &ApiKey, base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key: api_key.as_str().to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Returns the image generation endpoint URL.
    pub fn images_generations_url(&self) -> String {
        format!("{}/images/generations", self.base_url)
    }

    /// Returns the model listing endpoint URL.
    pub fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }
}

impl std::fmt::Debug for NebiusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NebiusClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

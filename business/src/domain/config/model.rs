use crate::domain::environment::EnvSnapshot;

pub const API_KEY_VAR: &str = "NEBIUS_API_KEY";
pub const VISION_MODEL_VAR: &str = "NEBIUS_VISION_MODEL";
pub const IMAGE_MODEL_VAR: &str = "NEBIUS_IMAGE_MODEL";
pub const BASE_URL_VAR: &str = "NEBIUS_BASE_URL";

pub const DEFAULT_VISION_MODEL: &str = "Qwen/Qwen2.5-VL-72B-Instruct";
pub const DEFAULT_IMAGE_MODEL: &str = "black-forest-labs/flux-dev";
pub const DEFAULT_BASE_URL: &str = "https://api.studio.nebius.com/v1";

/// Resolved Nebius AI configuration.
///
/// Model identifiers and the base URL are always populated, either from the
/// environment or from the defaults above. `api_key` is `None` when
/// `NEBIUS_API_KEY` is unset or empty.
#[derive(Clone, PartialEq, Eq)]
pub struct NebiusConfig {
    pub api_key: Option<String>,
    pub vision_model: String,
    pub image_gen_model: String,
    pub base_url: String,
}

impl NebiusConfig {
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self {
            api_key: env.get_non_empty(API_KEY_VAR).map(str::to_string),
            vision_model: env.get_or(VISION_MODEL_VAR, DEFAULT_VISION_MODEL),
            image_gen_model: env.get_or(IMAGE_MODEL_VAR, DEFAULT_IMAGE_MODEL),
            base_url: env.get_or(BASE_URL_VAR, DEFAULT_BASE_URL),
        }
    }
}

impl std::fmt::Debug for NebiusConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NebiusConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("vision_model", &self.vision_model)
            .field("image_gen_model", &self.image_gen_model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

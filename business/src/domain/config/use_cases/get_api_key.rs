use crate::domain::config::value_objects::ApiKey;
use crate::domain::environment::EnvSnapshot;

/// Reads `NEBIUS_API_KEY`; `None` when unset or empty.
pub trait GetApiKeyUseCase: Send + Sync {
    fn execute(&self, env: &EnvSnapshot) -> Option<ApiKey>;
}

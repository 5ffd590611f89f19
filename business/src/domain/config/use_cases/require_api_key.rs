use crate::domain::config::errors::ConfigError;
use crate::domain::config::value_objects::ApiKey;
use crate::domain::environment::EnvSnapshot;

pub trait RequireApiKeyUseCase: Send + Sync {
    fn execute(&self, env: &EnvSnapshot) -> Result<ApiKey, ConfigError>;
}

use crate::domain::config::model::NebiusConfig;
use crate::domain::environment::EnvSnapshot;

/// Resolves the full configuration with defaults applied. Never fails.
pub trait GetConfigUseCase: Send + Sync {
    fn execute(&self, env: &EnvSnapshot) -> NebiusConfig;
}

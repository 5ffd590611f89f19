use business::domain::client::model::ClientKind;
use business::domain::config::model::NebiusConfig;
use business::domain::environment::EnvSnapshot;

use crate::error::CliError;
use crate::setup::dependency_injection::DependencyContainer;

/// Everything the report prints, with the API key already masked.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSummary {
    pub masked_api_key: String,
    pub config: NebiusConfig,
    pub client_kind: ClientKind,
}

/// Require the API key, resolve the configuration and build a client handle.
pub fn execute(
    container: &DependencyContainer,
    env: &EnvSnapshot,
) -> Result<ConfigSummary, CliError> {
    let api_key = container.require_api_key.execute(env)?;
    let config = container.get_config.execute(env);
    let handle = container.build_client.execute(env)?;

    Ok(ConfigSummary {
        masked_api_key: api_key.masked(),
        config,
        client_kind: handle.kind,
    })
}

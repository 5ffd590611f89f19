use std::sync::Arc;

use crate::domain::client::errors::ClientError;
use crate::domain::client::model::{ClientHandle, ClientKind};
use crate::domain::client::services::ClientFactory;
use crate::domain::client::use_cases::build::BuildClientUseCase;
use crate::domain::config::use_cases::get_config::GetConfigUseCase;
use crate::domain::config::use_cases::require_api_key::RequireApiKeyUseCase;
use crate::domain::environment::EnvSnapshot;
use crate::domain::logger::Logger;

pub struct BuildClientUseCaseImpl<C> {
    pub get_config: Arc<dyn GetConfigUseCase>,
    pub require_api_key: Arc<dyn RequireApiKeyUseCase>,
    pub factory: Arc<dyn ClientFactory<Client = C>>,
    pub logger: Arc<dyn Logger>,
}

impl<C> BuildClientUseCase for BuildClientUseCaseImpl<C> {
    type Client = C;

    fn execute(&self, env: &EnvSnapshot) -> Result<ClientHandle<C>, ClientError> {
        let config = self.get_config.execute(env);
        let api_key = self.require_api_key.execute(env)?;

        self.logger.info(&format!(
            "Building Nebius client for {}",
            config.base_url
        ));

        let client = self
            .factory
            .create(&api_key, &config.base_url)
            .inspect_err(|err| {
                self.logger
                    .error(&format!("Failed to build Nebius client: {:?}", err))
            })?;

        Ok(ClientHandle {
            kind: ClientKind::Nebius,
            client,
            config,
        })
    }
}

use std::sync::Arc;

use logger::TracingLogger;
use nebius::client::NebiusClient;
use nebius::client_factory::NebiusClientFactory;

use business::application::client::build::BuildClientUseCaseImpl;
use business::application::config::get_api_key::GetApiKeyUseCaseImpl;
use business::application::config::get_config::GetConfigUseCaseImpl;
use business::application::config::require_api_key::RequireApiKeyUseCaseImpl;
use business::domain::client::use_cases::build::BuildClientUseCase;
use business::domain::config::use_cases::get_config::GetConfigUseCase;
use business::domain::config::use_cases::require_api_key::RequireApiKeyUseCase;

pub struct DependencyContainer {
    pub require_api_key: Arc<dyn RequireApiKeyUseCase>,
    pub get_config: Arc<dyn GetConfigUseCase>,
    pub build_client: Arc<dyn BuildClientUseCase<Client = NebiusClient>>,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);

        // Config use cases
        let get_api_key = Arc::new(GetApiKeyUseCaseImpl {
            logger: logger.clone(),
        });
        let get_config = Arc::new(GetConfigUseCaseImpl {
            logger: logger.clone(),
        });
        let require_api_key = Arc::new(RequireApiKeyUseCaseImpl {
            get_api_key,
            logger: logger.clone(),
        });

        // Client use cases
        let build_client = Arc::new(BuildClientUseCaseImpl::<NebiusClient> {
            get_config: get_config.clone(),
            require_api_key: require_api_key.clone(),
            factory: Arc::new(NebiusClientFactory),
            logger,
        });

        Self {
            require_api_key,
            get_config,
            build_client,
        }
    }
}

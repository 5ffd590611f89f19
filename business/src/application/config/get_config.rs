use std::sync::Arc;

use crate::domain::config::model::NebiusConfig;
use crate::domain::config::use_cases::get_config::GetConfigUseCase;
use crate::domain::environment::EnvSnapshot;
use crate::domain::logger::Logger;

pub struct GetConfigUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl GetConfigUseCase for GetConfigUseCaseImpl {
    fn execute(&self, env: &EnvSnapshot) -> NebiusConfig {
        let config = NebiusConfig::from_env(env);

        self.logger.debug(&format!(
            "Resolved Nebius configuration: vision_model={}, image_gen_model={}, base_url={}",
            config.vision_model, config.image_gen_model, config.base_url
        ));

        config
    }
}

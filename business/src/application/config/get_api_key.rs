use std::sync::Arc;

use crate::domain::config::model::API_KEY_VAR;
use crate::domain::config::use_cases::get_api_key::GetApiKeyUseCase;
use crate::domain::config::value_objects::ApiKey;
use crate::domain::environment::EnvSnapshot;
use crate::domain::logger::Logger;

pub struct GetApiKeyUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl GetApiKeyUseCase for GetApiKeyUseCaseImpl {
    fn execute(&self, env: &EnvSnapshot) -> Option<ApiKey> {
        let api_key = env
            .get_non_empty(API_KEY_VAR)
            .and_then(|value| ApiKey::new(value).ok());

        match &api_key {
            Some(_) => self.logger.debug(&format!("{} found", API_KEY_VAR)),
            None => self.logger.debug(&format!("{} is not set", API_KEY_VAR)),
        }

        api_key
    }
}

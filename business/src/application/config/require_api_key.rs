use std::sync::Arc;

use crate::domain::config::errors::ConfigError;
use crate::domain::config::model::API_KEY_VAR;
use crate::domain::config::use_cases::get_api_key::GetApiKeyUseCase;
use crate::domain::config::use_cases::require_api_key::RequireApiKeyUseCase;
use crate::domain::config::value_objects::ApiKey;
use crate::domain::environment::EnvSnapshot;
use crate::domain::logger::Logger;

pub struct RequireApiKeyUseCaseImpl {
    pub get_api_key: Arc<dyn GetApiKeyUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl RequireApiKeyUseCase for RequireApiKeyUseCaseImpl {
    fn execute(&self, env: &EnvSnapshot) -> Result<ApiKey, ConfigError> {
        match self.get_api_key.execute(env) {
            Some(api_key) => Ok(api_key),
            None => {
                self.logger
                    .warn(&format!("{} is missing or empty", API_KEY_VAR));
                Err(ConfigError::MissingApiKey)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::get_api_key::GetApiKeyUseCaseImpl;
    use mockall::mock;
    use proptest::prelude::*;

    mock! {
        pub GetApiKey {}

        impl GetApiKeyUseCase for GetApiKey {
            fn execute(&self, env: &EnvSnapshot) -> Option<ApiKey>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case() -> RequireApiKeyUseCaseImpl {
        let logger = mock_logger();
        RequireApiKeyUseCaseImpl {
            get_api_key: Arc::new(GetApiKeyUseCaseImpl {
                logger: logger.clone(),
            }),
            logger,
        }
    }

    #[test]
    fn should_return_error_when_api_key_missing() {
        // Arrange
        let mut get_api_key = MockGetApiKey::new();
        get_api_key.expect_execute().returning(|_| None);
        let mut logger = MockLog::new();
        logger.expect_warn().times(1).returning(|_| ());
        let use_case = RequireApiKeyUseCaseImpl {
            get_api_key: Arc::new(get_api_key),
            logger: Arc::new(logger),
        };

        // Act
        let result = use_case.execute(&EnvSnapshot::default());

        // Assert
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn should_return_error_when_api_key_empty() {
        let env: EnvSnapshot = [(API_KEY_VAR, "")].into_iter().collect();

        let result = use_case().execute(&env);

        assert_eq!(result, Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn should_pass_through_key_from_reader() {
        let mut get_api_key = MockGetApiKey::new();
        get_api_key
            .expect_execute()
            .returning(|_| ApiKey::new("from-reader").ok());
        let use_case = RequireApiKeyUseCaseImpl {
            get_api_key: Arc::new(get_api_key),
            logger: mock_logger(),
        };

        let result = use_case.execute(&EnvSnapshot::default());

        assert_eq!(result.unwrap().as_str(), "from-reader");
    }

    proptest! {
        #[test]
        fn returns_exactly_the_configured_key(key in "[ -~]{1,64}") {
            let env: EnvSnapshot = [(API_KEY_VAR, key.clone())].into_iter().collect();

            let result = use_case().execute(&env);

            prop_assert_eq!(result.map(|k| k.as_str().to_string()), Ok(key));
        }
    }
}

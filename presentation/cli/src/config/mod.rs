pub mod env_config;
pub mod logging_config;

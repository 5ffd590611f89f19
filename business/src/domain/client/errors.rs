use crate::domain::config::errors::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("client.config")]
    Config(#[from] ConfigError),
    #[error("client.dependency_unavailable")]
    DependencyUnavailable(String),
}

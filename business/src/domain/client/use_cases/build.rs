use crate::domain::client::errors::ClientError;
use crate::domain::client::model::ClientHandle;
use crate::domain::environment::EnvSnapshot;

pub trait BuildClientUseCase: Send + Sync {
    type Client;

    fn execute(&self, env: &EnvSnapshot) -> Result<ClientHandle<Self::Client>, ClientError>;
}

use crate::domain::config::model::NebiusConfig;

/// Discriminator tag carried by every client handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Nebius,
}

impl std::fmt::Display for ClientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientKind::Nebius => write!(f, "nebius"),
        }
    }
}

/// A constructed API client bundled with the configuration used to build it.
///
/// Owned exclusively by the caller.
#[derive(Debug)]
pub struct ClientHandle<C> {
    pub kind: ClientKind,
    pub client: C,
    pub config: NebiusConfig,
}

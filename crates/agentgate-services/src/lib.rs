//! # AgentGate Services
//!
//! In-memory backends for the service traits in `agentgate-protocols`.
//! Everything is lost when the process exits.

mod artifact;
mod credential;
mod memory;
mod session;

use std::sync::Arc;

use agentgate_protocols::{ArtifactService, CredentialService, MemoryService, SessionService};

pub use artifact::InMemoryArtifactService;
pub use credential::InMemoryCredentialService;
pub use memory::InMemoryMemoryService;
pub use session::InMemorySessionService;

/// The service handles mounted into the HTTP host.
#[derive(Clone)]
pub struct Services {
    pub sessions: Arc<dyn SessionService>,
    pub artifacts: Arc<dyn ArtifactService>,
    pub memory: Arc<dyn MemoryService>,
    pub credentials: Arc<dyn CredentialService>,
}

impl Services {
    /// All four services backed by process memory.
    pub fn in_memory() -> Self {
        Self {
            sessions: Arc::new(InMemorySessionService::new()),
            artifacts: Arc::new(InMemoryArtifactService::new()),
            memory: Arc::new(InMemoryMemoryService::new()),
            credentials: Arc::new(InMemoryCredentialService::new()),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::in_memory()
    }
}

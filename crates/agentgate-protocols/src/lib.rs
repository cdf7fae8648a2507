//! # AgentGate Protocols
//!
//! Interface definitions shared between the HTTP host, the plugins and the
//! service backends. Contains only data types and traits.
//!
//! ## Core Traits
//!
//! - [`ArtifactService`] - Durable storage for named, versioned artifacts
//! - [`SessionService`] - Conversation session bookkeeping
//! - [`MemoryService`] - Long-term recall across sessions
//! - [`CredentialService`] - Per-user credential storage
//! - [`Plugin`] - Turn-boundary callbacks invoked by the orchestration engine

pub mod artifact;
pub mod credential;
pub mod error;
pub mod invocation;
pub mod memory;
pub mod plugin;
pub mod session;
pub mod types;

pub use artifact::{ArtifactService, ArtifactVersion};
pub use credential::{Credential, CredentialService};
pub use error::{ArtifactError, CredentialError, MemoryError, PluginError, SessionError};
pub use invocation::InvocationContext;
pub use memory::{MemoryEntry, MemoryService};
pub use plugin::{OutputSignal, Plugin};
pub use session::{Session, SessionService};
pub use types::*;

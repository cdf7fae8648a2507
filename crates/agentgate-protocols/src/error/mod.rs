//! Error types for the AgentGate protocol layer.

mod artifact;
mod credential;
mod memory;
mod plugin;
mod session;

pub use artifact::*;
pub use credential::*;
pub use memory::*;
pub use plugin::*;
pub use session::*;

//! # AgentGate Config
//!
//! Configuration for the AgentGate server. Values come from built-in
//! defaults, an optional TOML file and environment variables, in that order
//! of increasing precedence.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::{ConfigLoader, ENV_VARS};
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};

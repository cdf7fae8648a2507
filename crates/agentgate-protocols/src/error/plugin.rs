//! Plugin registration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Plugin already registered: {0}")]
    Duplicate(String),

    #[error("Invalid plugin name: {0:?}")]
    InvalidName(String),
}

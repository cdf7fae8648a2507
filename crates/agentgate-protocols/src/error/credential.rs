//! Credential service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Invalid credential key: {0}")]
    InvalidKey(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

//! Artifact service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {0}")]
    NotFound(String),

    #[error("Invalid artifact filename: {0}")]
    InvalidFilename(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Artifact service unavailable: {0}")]
    Unavailable(String),
}

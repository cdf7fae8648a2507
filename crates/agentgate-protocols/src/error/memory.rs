//! Memory service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

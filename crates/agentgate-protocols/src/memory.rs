//! Memory service protocol definitions.
//!
//! Memory services ingest finished sessions and answer recall queries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MemoryError;
use crate::session::Session;
use crate::types::Content;

/// One recalled piece of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub content: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[async_trait]
pub trait MemoryService: Send + Sync {
    /// Ingest the contents of a session.
    async fn add_session_to_memory(
        &self,
        session: &Session,
        contents: Vec<Content>,
    ) -> Result<(), MemoryError>;

    /// Search memories of one user within an application.
    async fn search_memory(
        &self,
        app_name: &str,
        user_id: &str,
        query: &str,
    ) -> Result<Vec<MemoryEntry>, MemoryError>;
}

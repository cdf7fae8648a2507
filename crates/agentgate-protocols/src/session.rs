//! Session service protocol definitions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::types::State;

/// A conversation session between a user and an application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub app_name: String,
    pub user_id: String,
    #[serde(default)]
    pub state: State,
    pub last_update_time: DateTime<Utc>,
}

/// Core trait for session backends.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Create a session. A `session_id` of `None` lets the backend assign one.
    async fn create_session(
        &self,
        app_name: &str,
        user_id: &str,
        state: State,
        session_id: Option<String>,
    ) -> Result<Session, SessionError>;

    async fn get_session(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<Option<Session>, SessionError>;

    async fn list_sessions(
        &self,
        app_name: &str,
        user_id: &str,
    ) -> Result<Vec<Session>, SessionError>;

    async fn delete_session(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<(), SessionError>;
}

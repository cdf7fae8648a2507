//! In-memory session service.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use agentgate_protocols::types::State;
use agentgate_protocols::{Session, SessionError, SessionService};

/// In-memory session service.
pub struct InMemorySessionService {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionService {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    fn key(app_name: &str, user_id: &str, session_id: &str) -> String {
        format!("{}/{}/{}", app_name, user_id, session_id)
    }
}

impl Default for InMemorySessionService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionService for InMemorySessionService {
    async fn create_session(
        &self,
        app_name: &str,
        user_id: &str,
        state: State,
        session_id: Option<String>,
    ) -> Result<Session, SessionError> {
        let id = session_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let key = Self::key(app_name, user_id, &id);

        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&key) {
            return Err(SessionError::AlreadyExists(id));
        }

        let session = Session {
            id,
            app_name: app_name.to_string(),
            user_id: user_id.to_string(),
            state,
            last_update_time: Utc::now(),
        };
        sessions.insert(key, session.clone());
        Ok(session)
    }

    async fn get_session(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<Option<Session>, SessionError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&Self::key(app_name, user_id, session_id)).cloned())
    }

    async fn list_sessions(
        &self,
        app_name: &str,
        user_id: &str,
    ) -> Result<Vec<Session>, SessionError> {
        let sessions = self.sessions.read().await;
        let mut found: Vec<Session> = sessions
            .values()
            .filter(|s| s.app_name == app_name && s.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(found)
    }

    async fn delete_session(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(&Self::key(app_name, user_id, session_id))
            .map(|_| ())
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_with_generated_id() {
        let service = InMemorySessionService::new();
        let session = service
            .create_session("app", "u1", State::new(), None)
            .await
            .unwrap();
        assert!(!session.id.is_empty());
        assert_eq!(session.app_name, "app");
        assert_eq!(session.user_id, "u1");
    }

    #[tokio::test]
    async fn test_create_with_explicit_id_and_duplicate() {
        let service = InMemorySessionService::new();
        service
            .create_session("app", "u1", State::new(), Some("s1".into()))
            .await
            .unwrap();
        let dup = service
            .create_session("app", "u1", State::new(), Some("s1".into()))
            .await;
        assert!(matches!(dup, Err(SessionError::AlreadyExists(_))));

        // Same id under another user is a different session.
        service
            .create_session("app", "u2", State::new(), Some("s1".into()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_and_list_sessions() {
        let service = InMemorySessionService::new();
        let mut state = State::new();
        state.insert("genre".into(), serde_json::json!("noir"));
        service
            .create_session("app", "u1", state, Some("b".into()))
            .await
            .unwrap();
        service
            .create_session("app", "u1", State::new(), Some("a".into()))
            .await
            .unwrap();
        service
            .create_session("other", "u1", State::new(), Some("c".into()))
            .await
            .unwrap();

        let session = service.get_session("app", "u1", "b").await.unwrap().unwrap();
        assert_eq!(session.state["genre"], "noir");

        let ids: Vec<String> = service
            .list_sessions("app", "u1")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);

        assert!(service.get_session("app", "u1", "zzz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_session() {
        let service = InMemorySessionService::new();
        service
            .create_session("app", "u1", State::new(), Some("s1".into()))
            .await
            .unwrap();
        service.delete_session("app", "u1", "s1").await.unwrap();
        assert!(service.get_session("app", "u1", "s1").await.unwrap().is_none());

        let missing = service.delete_session("app", "u1", "s1").await;
        assert!(matches!(missing, Err(SessionError::NotFound(_))));
    }
}

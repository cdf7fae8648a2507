//! In-memory credential service.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use agentgate_protocols::{Credential, CredentialError, CredentialService};

pub struct InMemoryCredentialService {
    credentials: RwLock<HashMap<String, Credential>>,
}

impl InMemoryCredentialService {
    pub fn new() -> Self {
        Self {
            credentials: RwLock::new(HashMap::new()),
        }
    }

    fn key(app_name: &str, user_id: &str, key: &str) -> Result<String, CredentialError> {
        if key.trim().is_empty() {
            return Err(CredentialError::InvalidKey(key.to_string()));
        }
        Ok(format!("{}/{}/{}", app_name, user_id, key))
    }
}

impl Default for InMemoryCredentialService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialService for InMemoryCredentialService {
    async fn save_credential(
        &self,
        app_name: &str,
        user_id: &str,
        key: &str,
        credential: Credential,
    ) -> Result<(), CredentialError> {
        let key = Self::key(app_name, user_id, key)?;
        self.credentials.write().await.insert(key, credential);
        Ok(())
    }

    async fn load_credential(
        &self,
        app_name: &str,
        user_id: &str,
        key: &str,
    ) -> Result<Option<Credential>, CredentialError> {
        let key = Self::key(app_name, user_id, key)?;
        Ok(self.credentials.read().await.get(&key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_load_credential() {
        let service = InMemoryCredentialService::new();
        let credential = Credential {
            auth_type: "oauth2".into(),
            payload: serde_json::json!({"access_token": "abc"}),
        };
        service
            .save_credential("app", "u1", "calendar", credential.clone())
            .await
            .unwrap();

        let loaded = service.load_credential("app", "u1", "calendar").await.unwrap();
        assert_eq!(loaded, Some(credential));
        assert!(service
            .load_credential("app", "u2", "calendar")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_blank_key_rejected() {
        let service = InMemoryCredentialService::new();
        let result = service.load_credential("app", "u1", "").await;
        assert!(matches!(result, Err(CredentialError::InvalidKey(_))));
    }
}

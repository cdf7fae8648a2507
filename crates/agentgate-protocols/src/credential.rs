//! Credential service protocol definitions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CredentialError;

/// An opaque credential, e.g. an OAuth token set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub auth_type: String,
    pub payload: serde_json::Value,
}

#[async_trait]
pub trait CredentialService: Send + Sync {
    async fn save_credential(
        &self,
        app_name: &str,
        user_id: &str,
        key: &str,
        credential: Credential,
    ) -> Result<(), CredentialError>;

    async fn load_credential(
        &self,
        app_name: &str,
        user_id: &str,
        key: &str,
    ) -> Result<Option<Credential>, CredentialError>;
}

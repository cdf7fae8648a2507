//! In-memory artifact service.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use agentgate_protocols::artifact::is_user_scoped;
use agentgate_protocols::{ArtifactError, ArtifactService, ArtifactVersion, Part};

/// Namespace an artifact lives in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Scope {
    Session(String),
    /// Shared by every session of the user (`user:` filenames).
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ArtifactKey {
    app_name: String,
    user_id: String,
    scope: Scope,
    filename: String,
}

/// Stores every version of every artifact in a sorted map.
pub struct InMemoryArtifactService {
    artifacts: RwLock<BTreeMap<ArtifactKey, Vec<Part>>>,
}

impl InMemoryArtifactService {
    pub fn new() -> Self {
        Self {
            artifacts: RwLock::new(BTreeMap::new()),
        }
    }

    fn artifact_key(
        app_name: &str,
        user_id: &str,
        session_id: &str,
        filename: &str,
    ) -> Result<ArtifactKey, ArtifactError> {
        if filename.trim().is_empty() {
            return Err(ArtifactError::InvalidFilename(filename.to_string()));
        }
        let scope = if is_user_scoped(filename) {
            Scope::User
        } else {
            Scope::Session(session_id.to_string())
        };
        Ok(ArtifactKey {
            app_name: app_name.to_string(),
            user_id: user_id.to_string(),
            scope,
            filename: filename.to_string(),
        })
    }
}

impl Default for InMemoryArtifactService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactService for InMemoryArtifactService {
    async fn save_artifact(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
        filename: &str,
        artifact: Part,
    ) -> Result<ArtifactVersion, ArtifactError> {
        let key = Self::artifact_key(app_name, user_id, session_id, filename)?;
        let mut artifacts = self.artifacts.write().await;
        let versions = artifacts.entry(key).or_default();
        versions.push(artifact);
        let version = (versions.len() - 1) as ArtifactVersion;
        debug!(filename, version, "artifact stored");
        Ok(version)
    }

    async fn load_artifact(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
        filename: &str,
        version: Option<ArtifactVersion>,
    ) -> Result<Option<Part>, ArtifactError> {
        let key = Self::artifact_key(app_name, user_id, session_id, filename)?;
        let artifacts = self.artifacts.read().await;
        let Some(versions) = artifacts.get(&key) else {
            return Ok(None);
        };
        let part = match version {
            Some(v) => versions.get(v as usize),
            None => versions.last(),
        };
        Ok(part.cloned())
    }

    async fn list_artifact_keys(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<Vec<String>, ArtifactError> {
        let artifacts = self.artifacts.read().await;
        let mut keys: Vec<String> = artifacts
            .keys()
            .filter(|key| key.app_name == app_name && key.user_id == user_id)
            .filter(|key| match &key.scope {
                Scope::Session(id) => id == session_id,
                Scope::User => true,
            })
            .map(|key| key.filename.clone())
            .collect();
        keys.sort();
        keys.dedup();
        Ok(keys)
    }

    async fn list_versions(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
        filename: &str,
    ) -> Result<Vec<ArtifactVersion>, ArtifactError> {
        let key = Self::artifact_key(app_name, user_id, session_id, filename)?;
        let artifacts = self.artifacts.read().await;
        Ok(artifacts
            .get(&key)
            .map(|versions| (0..versions.len() as ArtifactVersion).collect())
            .unwrap_or_default())
    }

    async fn delete_artifact(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
        filename: &str,
    ) -> Result<(), ArtifactError> {
        let key = Self::artifact_key(app_name, user_id, session_id, filename)?;
        self.artifacts
            .write()
            .await
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| ArtifactError::NotFound(filename.to_string()))
    }
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;

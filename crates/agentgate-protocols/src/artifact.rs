//! Artifact service protocol definitions.
//!
//! An artifact is a named, versioned copy of an inline-data [`Part`] stored
//! per application, user and session.

use async_trait::async_trait;

use crate::error::ArtifactError;
use crate::types::Part;

/// Artifact version number. The first save of a key is version 0.
pub type ArtifactVersion = u32;

/// Filename prefix marking an artifact as shared by all sessions of a user.
pub const USER_NAMESPACE_PREFIX: &str = "user:";

/// Whether `filename` lives in the user namespace rather than a session.
pub fn is_user_scoped(filename: &str) -> bool {
    filename.starts_with(USER_NAMESPACE_PREFIX)
}

/// Core trait for artifact storage backends.
#[async_trait]
pub trait ArtifactService: Send + Sync {
    /// Persist `artifact` under `filename` and return the new version.
    async fn save_artifact(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
        filename: &str,
        artifact: Part,
    ) -> Result<ArtifactVersion, ArtifactError>;

    /// Load an artifact. `version: None` loads the latest.
    async fn load_artifact(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
        filename: &str,
        version: Option<ArtifactVersion>,
    ) -> Result<Option<Part>, ArtifactError>;

    /// List artifact filenames visible to a session, sorted.
    async fn list_artifact_keys(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<Vec<String>, ArtifactError>;

    /// List all stored versions of one artifact.
    async fn list_versions(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
        filename: &str,
    ) -> Result<Vec<ArtifactVersion>, ArtifactError>;

    /// Delete every version of an artifact.
    async fn delete_artifact(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
        filename: &str,
    ) -> Result<(), ArtifactError>;
}

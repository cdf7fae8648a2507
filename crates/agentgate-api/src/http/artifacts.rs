//! Artifact browsing endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use agentgate_protocols::{ArtifactVersion, Part};

use crate::error::ApiError;
use crate::state::AppState;

type SessionPath = (String, String, String);
type ArtifactPath = (String, String, String, String);

/// Query for fetching one artifact.
#[derive(Debug, Default, Deserialize)]
pub struct LoadArtifactQuery {
    /// Specific version; latest when absent.
    #[serde(default)]
    pub version: Option<ArtifactVersion>,
}

/// List artifact filenames visible to a session.
pub async fn list_artifacts(
    State(state): State<Arc<AppState>>,
    Path((app_name, user_id, session_id)): Path<SessionPath>,
) -> Result<Json<Vec<String>>, ApiError> {
    let keys = state
        .services
        .artifacts
        .list_artifact_keys(&app_name, &user_id, &session_id)
        .await?;
    Ok(Json(keys))
}

/// Fetch an artifact, latest version unless `?version=` is given.
pub async fn get_artifact(
    State(state): State<Arc<AppState>>,
    Path((app_name, user_id, session_id, filename)): Path<ArtifactPath>,
    Query(query): Query<LoadArtifactQuery>,
) -> Result<Json<Part>, ApiError> {
    state
        .services
        .artifacts
        .load_artifact(&app_name, &user_id, &session_id, &filename, query.version)
        .await?
        .map(Json)
        .ok_or_else(|| match query.version {
            Some(v) => ApiError::NotFound(format!("Artifact {} version {}", filename, v)),
            None => ApiError::NotFound(format!("Artifact {}", filename)),
        })
}

/// List the stored versions of an artifact.
pub async fn list_artifact_versions(
    State(state): State<Arc<AppState>>,
    Path((app_name, user_id, session_id, filename)): Path<ArtifactPath>,
) -> Result<Json<Vec<ArtifactVersion>>, ApiError> {
    let versions = state
        .services
        .artifacts
        .list_versions(&app_name, &user_id, &session_id, &filename)
        .await?;
    Ok(Json(versions))
}

/// Delete every version of an artifact.
pub async fn delete_artifact(
    State(state): State<Arc<AppState>>,
    Path((app_name, user_id, session_id, filename)): Path<ArtifactPath>,
) -> Result<StatusCode, ApiError> {
    state
        .services
        .artifacts
        .delete_artifact(&app_name, &user_id, &session_id, &filename)
        .await?;
    info!(app = %app_name, session_id = %session_id, filename = %filename, "Artifact deleted");
    Ok(StatusCode::NO_CONTENT)
}

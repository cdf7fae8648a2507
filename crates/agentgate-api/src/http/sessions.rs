//! Session management endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use agentgate_protocols::{Session, State as SessionState};

use crate::error::ApiError;
use crate::state::AppState;

/// Optional body for session creation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub state: SessionState,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl CreateSessionRequest {
    /// Parse a request body. An empty body means defaults.
    fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

/// Create a session for a user of an app.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Path((app_name, user_id)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<Session>, ApiError> {
    let request = CreateSessionRequest::from_body(&body)?;
    let session = state
        .services
        .sessions
        .create_session(&app_name, &user_id, request.state, request.session_id)
        .await?;
    info!(app = %app_name, user = %user_id, session_id = %session.id, "Session created");
    Ok(Json(session))
}

/// List a user's sessions.
pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
    Path((app_name, user_id)): Path<(String, String)>,
) -> Result<Json<Vec<Session>>, ApiError> {
    let sessions = state
        .services
        .sessions
        .list_sessions(&app_name, &user_id)
        .await?;
    Ok(Json(sessions))
}

/// Fetch one session.
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path((app_name, user_id, session_id)): Path<(String, String, String)>,
) -> Result<Json<Session>, ApiError> {
    state
        .services
        .sessions
        .get_session(&app_name, &user_id, &session_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Session {}", session_id)))
}

/// Delete a session.
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path((app_name, user_id, session_id)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    state
        .services
        .sessions
        .delete_session(&app_name, &user_id, &session_id)
        .await?;
    info!(app = %app_name, user = %user_id, session_id = %session_id, "Session deleted");
    Ok(StatusCode::NO_CONTENT)
}

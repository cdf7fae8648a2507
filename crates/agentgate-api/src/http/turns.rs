//! Turn output hand-off.
//!
//! The orchestration engine posts each finished turn's output here. The
//! output runs through the registered plugins and the content to forward is
//! returned. The forwarded content is also ingested into the user's memory.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use agentgate_protocols::Content;

use crate::error::ApiError;
use crate::state::AppState;

/// A finished turn.
#[derive(Debug, Deserialize)]
pub struct TurnRequest {
    /// Identifier of the turn; generated when absent.
    #[serde(default)]
    pub invocation_id: Option<String>,
    pub output: Content,
}

/// Content to forward after plugins ran.
#[derive(Debug, Serialize, Deserialize)]
pub struct TurnResponse {
    pub invocation_id: String,
    pub output: Content,
}

/// Run the plugins over one turn's output.
pub async fn submit_turn(
    State(state): State<Arc<AppState>>,
    Path((app_name, user_id, session_id)): Path<(String, String, String)>,
    Json(request): Json<TurnRequest>,
) -> Result<Json<TurnResponse>, ApiError> {
    let session = state
        .services
        .sessions
        .get_session(&app_name, &user_id, &session_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Session {}", session_id)))?;

    let invocation_id = request
        .invocation_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    debug!(
        invocation_id = %invocation_id,
        parts = request.output.parts.len(),
        "Turn output received"
    );

    let ctx = state.invocation_context(invocation_id.clone(), &app_name, &user_id, &session_id);
    let output = state.plugins.run_agent_output(&ctx, request.output).await;

    // Memory is best effort; the turn output is forwarded either way.
    if let Err(e) = state
        .services
        .memory
        .add_session_to_memory(&session, vec![output.clone()])
        .await
    {
        warn!(invocation_id = %invocation_id, error = %e, "Failed to add turn to memory");
    }

    Ok(Json(TurnResponse {
        invocation_id,
        output,
    }))
}

//! Memory recall endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use agentgate_protocols::MemoryEntry;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchMemoryQuery {
    #[serde(default)]
    pub query: String,
}

/// Search what a user's earlier turns left in memory.
pub async fn search_memory(
    State(state): State<Arc<AppState>>,
    Path((app_name, user_id)): Path<(String, String)>,
    Query(query): Query<SearchMemoryQuery>,
) -> Result<Json<Vec<MemoryEntry>>, ApiError> {
    let entries = state
        .services
        .memory
        .search_memory(&app_name, &user_id, &query.query)
        .await?;
    Ok(Json(entries))
}

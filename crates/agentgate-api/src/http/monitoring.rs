//! Health, information and discovery handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, Json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

const SERVICE_NAME: &str = "AgentGate Multi-Agent System";

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    pub version: String,
    pub agents: Vec<String>,
}

/// Service information response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InfoResponse {
    pub service: String,
    pub version: String,
    pub environment: String,
    pub model: String,
    /// Agent name to description.
    pub agents: BTreeMap<String, String>,
    /// Registered turn plugins, in run order.
    pub plugins: Vec<String>,
    /// Well-known endpoint paths.
    pub endpoints: BTreeMap<String, String>,
}

/// Health check for monitoring.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        environment: state.config.server.environment.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        agents: state.config.agents.names(),
    })
}

/// Service information.
pub async fn service_info(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    let endpoints = [
        ("health", "/health"),
        ("info", "/info"),
        ("apps", "/list-apps"),
        ("docs", "/openapi.json"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    Json(InfoResponse {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.server.environment.to_string(),
        model: state.config.model.name.clone(),
        agents: state.config.agents.catalog.clone(),
        plugins: state.plugins.names(),
        endpoints,
    })
}

/// Liveness probe.
pub async fn liveness_probe() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive"
    }))
}

/// Names of the hosted agents.
pub async fn list_apps(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.config.agents.names())
}

/// The filtered OpenAPI document.
pub async fn openapi_json(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(state.openapi_document().clone())
}

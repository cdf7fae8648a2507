//! HTTP route definitions.
//!
//! ## Route Structure
//!
//! ```text
//! /health        - Health check
//! /info          - Service information
//! /livez         - Liveness probe
//! /list-apps     - Hosted agent names
//! /openapi.json  - Filtered OpenAPI document
//!
//! /apps/{app_name}/users/{user_id}/sessions
//!   POST   /                                   - Create session
//!   GET    /                                   - List sessions
//!   GET    /{session_id}                       - Get session
//!   DELETE /{session_id}                       - Delete session
//!   POST   /{session_id}/turns                 - Run plugins over a turn's output
//!   GET    /{session_id}/artifacts             - List artifact names
//!   GET    /{session_id}/artifacts/{name}      - Get artifact (?version=)
//!   GET    /{session_id}/artifacts/{name}/versions - List versions
//!   DELETE /{session_id}/artifacts/{name}      - Delete artifact
//!
//! /apps/{app_name}/users/{user_id}/memory
//!   GET    /?query=                            - Search memory
//! ```

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::http::{artifacts, memory, monitoring, sessions, turns};
use crate::openapi::{ResponseKind, RouteSpec};
use crate::state::AppState;

const MEMORY: &str = "/apps/{app_name}/users/{user_id}/memory";
const SESSIONS: &str = "/apps/{app_name}/users/{user_id}/sessions";
const SESSION: &str = "/apps/{app_name}/users/{user_id}/sessions/{session_id}";
const TURNS: &str = "/apps/{app_name}/users/{user_id}/sessions/{session_id}/turns";
const ARTIFACTS: &str = "/apps/{app_name}/users/{user_id}/sessions/{session_id}/artifacts";
const ARTIFACT: &str =
    "/apps/{app_name}/users/{user_id}/sessions/{session_id}/artifacts/{artifact_name}";
const ARTIFACT_VERSIONS: &str =
    "/apps/{app_name}/users/{user_id}/sessions/{session_id}/artifacts/{artifact_name}/versions";

const fn route(
    method: &'static str,
    path: &'static str,
    summary: &'static str,
    operation_id: &'static str,
    tag: &'static str,
    response: ResponseKind,
) -> RouteSpec {
    RouteSpec {
        method,
        path,
        summary,
        operation_id,
        tag,
        query: &[],
        response,
    }
}

/// Every route served by [`create_router`], as documented in OpenAPI.
pub const API_ROUTES: &[RouteSpec] = &[
    route("GET", "/health", "Health Check", "health_check", "monitoring", ResponseKind::Health),
    route("GET", "/info", "Service Information", "get_info", "information", ResponseKind::Info),
    route("GET", "/livez", "Liveness Probe", "liveness_probe", "monitoring", ResponseKind::Json),
    route("GET", "/list-apps", "List Apps", "list_apps", "information", ResponseKind::Json),
    route("POST", SESSIONS, "Create Session", "create_session", "sessions", ResponseKind::Json),
    route("GET", SESSIONS, "List Sessions", "list_sessions", "sessions", ResponseKind::Json),
    route("GET", SESSION, "Get Session", "get_session", "sessions", ResponseKind::Json),
    route("DELETE", SESSION, "Delete Session", "delete_session", "sessions", ResponseKind::NoContent),
    route("POST", TURNS, "Submit Turn Output", "submit_turn", "turns", ResponseKind::Json),
    route("GET", ARTIFACTS, "List Artifacts", "list_artifacts", "artifacts", ResponseKind::Json),
    RouteSpec {
        method: "GET",
        path: ARTIFACT,
        summary: "Get Artifact",
        operation_id: "get_artifact",
        tag: "artifacts",
        query: &[("version", "integer")],
        response: ResponseKind::Json,
    },
    route(
        "GET",
        ARTIFACT_VERSIONS,
        "List Artifact Versions",
        "list_artifact_versions",
        "artifacts",
        ResponseKind::Json,
    ),
    route(
        "DELETE",
        ARTIFACT,
        "Delete Artifact",
        "delete_artifact",
        "artifacts",
        ResponseKind::NoContent,
    ),
    RouteSpec {
        method: "GET",
        path: MEMORY,
        summary: "Search Memory",
        operation_id: "search_memory",
        tag: "memory",
        query: &[("query", "string")],
        response: ResponseKind::Json,
    },
];

/// Create the main router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let monitoring_routes = Router::new()
        .route("/health", get(monitoring::health_check))
        .route("/info", get(monitoring::service_info))
        .route("/livez", get(monitoring::liveness_probe))
        .route("/list-apps", get(monitoring::list_apps))
        .route("/openapi.json", get(monitoring::openapi_json));

    let session_routes = Router::new()
        .route(
            SESSIONS,
            post(sessions::create_session).get(sessions::list_sessions),
        )
        .route(
            SESSION,
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route(TURNS, post(turns::submit_turn))
        .route(MEMORY, get(memory::search_memory));

    let artifact_routes = Router::new()
        .route(ARTIFACTS, get(artifacts::list_artifacts))
        .route(
            ARTIFACT,
            get(artifacts::get_artifact).delete(artifacts::delete_artifact),
        )
        .route(ARTIFACT_VERSIONS, get(artifacts::list_artifact_versions));

    Router::new()
        .merge(monitoring_routes)
        .merge(session_routes)
        .merge(artifact_routes)
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;

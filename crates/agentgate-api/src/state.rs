//! Application state.

use std::sync::{Arc, OnceLock};

use agentgate_config::Config;
use agentgate_plugins::PluginManager;
use agentgate_protocols::InvocationContext;
use agentgate_services::Services;

use crate::http::routes::API_ROUTES;
use crate::openapi::OpenApiBuilder;

/// Application state shared across handlers.
pub struct AppState {
    pub config: Arc<Config>,
    pub services: Services,
    pub plugins: Arc<PluginManager>,
    openapi: OnceLock<serde_json::Value>,
}

impl AppState {
    pub fn new(config: Arc<Config>, services: Services, plugins: Arc<PluginManager>) -> Self {
        Self {
            config,
            services,
            plugins,
            openapi: OnceLock::new(),
        }
    }

    /// The OpenAPI document, generated on first use.
    pub fn openapi_document(&self) -> &serde_json::Value {
        self.openapi.get_or_init(|| {
            OpenApiBuilder::new()
                .with_agents(&self.config.agents.catalog)
                .document(API_ROUTES)
        })
    }

    /// Invocation context for one turn, wired to the mounted artifact service.
    pub fn invocation_context(
        &self,
        invocation_id: impl Into<String>,
        app_name: &str,
        user_id: &str,
        session_id: &str,
    ) -> InvocationContext {
        InvocationContext::new(invocation_id, app_name, user_id, session_id)
            .with_artifact_service(self.services.artifacts.clone())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(Config::default()),
            Services::in_memory(),
            Arc::new(PluginManager::new()),
        )
    }
}

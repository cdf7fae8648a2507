//! Per-turn invocation context.

use std::fmt;
use std::sync::Arc;

use crate::artifact::ArtifactService;

/// Identifies one agent turn and the capabilities available to it.
///
/// Supplied by the orchestration engine; plugins only read it.
#[derive(Clone)]
pub struct InvocationContext {
    /// Unique per turn.
    pub invocation_id: String,
    pub app_name: String,
    pub user_id: String,
    pub session_id: String,
    /// Absent when artifact storage is disabled.
    pub artifact_service: Option<Arc<dyn ArtifactService>>,
}

impl InvocationContext {
    pub fn new(
        invocation_id: impl Into<String>,
        app_name: impl Into<String>,
        user_id: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            invocation_id: invocation_id.into(),
            app_name: app_name.into(),
            user_id: user_id.into(),
            session_id: session_id.into(),
            artifact_service: None,
        }
    }

    pub fn with_artifact_service(mut self, service: Arc<dyn ArtifactService>) -> Self {
        self.artifact_service = Some(service);
        self
    }
}

impl fmt::Debug for InvocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationContext")
            .field("invocation_id", &self.invocation_id)
            .field("app_name", &self.app_name)
            .field("user_id", &self.user_id)
            .field("session_id", &self.session_id)
            .field("artifact_service", &self.artifact_service.is_some())
            .finish()
    }
}

//! Test doubles shared by the plugin tests.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use agentgate_protocols::{ArtifactError, ArtifactService, ArtifactVersion, Part};

/// One recorded `save_artifact` call.
#[derive(Debug, Clone)]
pub struct SaveCall {
    pub app_name: String,
    pub user_id: String,
    pub session_id: String,
    pub filename: String,
    pub artifact: Part,
}

/// Artifact service that records calls and fails for chosen filenames.
#[derive(Default)]
pub struct RecordingArtifactService {
    calls: Mutex<Vec<SaveCall>>,
    failing: HashSet<String>,
}

impl RecordingArtifactService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(filenames: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: filenames.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn calls(&self) -> Vec<SaveCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtifactService for RecordingArtifactService {
    async fn save_artifact(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
        filename: &str,
        artifact: Part,
    ) -> Result<ArtifactVersion, ArtifactError> {
        self.calls.lock().unwrap().push(SaveCall {
            app_name: app_name.to_string(),
            user_id: user_id.to_string(),
            session_id: session_id.to_string(),
            filename: filename.to_string(),
            artifact,
        });
        if self.failing.contains(filename) {
            return Err(ArtifactError::Unavailable("store offline".to_string()));
        }
        Ok(0)
    }

    async fn load_artifact(
        &self,
        _app_name: &str,
        _user_id: &str,
        _session_id: &str,
        _filename: &str,
        _version: Option<ArtifactVersion>,
    ) -> Result<Option<Part>, ArtifactError> {
        Ok(None)
    }

    async fn list_artifact_keys(
        &self,
        _app_name: &str,
        _user_id: &str,
        _session_id: &str,
    ) -> Result<Vec<String>, ArtifactError> {
        Ok(Vec::new())
    }

    async fn list_versions(
        &self,
        _app_name: &str,
        _user_id: &str,
        _session_id: &str,
        _filename: &str,
    ) -> Result<Vec<ArtifactVersion>, ArtifactError> {
        Ok(Vec::new())
    }

    async fn delete_artifact(
        &self,
        _app_name: &str,
        _user_id: &str,
        _session_id: &str,
        filename: &str,
    ) -> Result<(), ArtifactError> {
        Err(ArtifactError::NotFound(filename.to_string()))
    }
}

/// A captured log event.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
}

/// Layer that keeps every event it sees.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl CapturedLogs {
    /// Install a capturing subscriber on the current thread.
    pub fn install() -> (Self, tracing::subscriber::DefaultGuard) {
        let logs = Self::default();
        let subscriber = tracing_subscriber::registry().with(logs.clone());
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    pub fn count(&self, level: Level) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.level == level)
            .count()
    }

    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.level == level && r.message.contains(needle))
    }
}

struct MessageVisitor<'a>(&'a mut String);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0.push_str(&format!("{:?}", value));
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));
        self.records.lock().unwrap().push(LogRecord {
            level: *event.metadata().level(),
            message,
        });
    }
}

//! Artifact capture plugin.
//!
//! After each turn, every inline-data part of the agent output is stored
//! through the invocation's artifact service under a non-blank filename and
//! with a non-blank media type. The output itself is never modified; the
//! stored artifact is a side record.

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use agentgate_protocols::types::DEFAULT_MIME_TYPE;
use agentgate_protocols::{
    ArtifactService, ArtifactVersion, Content, InvocationContext, OutputSignal, Part, Plugin,
};

/// Registration name used when none is given.
pub const DEFAULT_PLUGIN_NAME: &str = "save_artifacts_plugin";

/// Filename for an inline-data part that carries no display name.
pub fn generated_filename(invocation_id: &str, index: usize) -> String {
    format!("artifact_{}_{}.txt", invocation_id, index)
}

/// Result of handling one part of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOutcome {
    /// Not inline data; left alone.
    Skipped { index: usize },
    Saved {
        index: usize,
        filename: String,
        mime_type: String,
        version: ArtifactVersion,
        name_generated: bool,
        mime_defaulted: bool,
    },
    Failed {
        index: usize,
        filename: String,
        error: String,
    },
}

impl PartOutcome {
    pub fn index(&self) -> usize {
        match self {
            PartOutcome::Skipped { index }
            | PartOutcome::Saved { index, .. }
            | PartOutcome::Failed { index, .. } => *index,
        }
    }
}

/// Result of one capture pass over a turn's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureReport {
    /// The invocation has no artifact service.
    Disabled,
    /// One outcome per part, in part order.
    Processed(Vec<PartOutcome>),
}

impl CaptureReport {
    pub fn outcomes(&self) -> &[PartOutcome] {
        match self {
            CaptureReport::Disabled => &[],
            CaptureReport::Processed(outcomes) => outcomes,
        }
    }

    pub fn saved_count(&self) -> usize {
        self.outcomes()
            .iter()
            .filter(|o| matches!(o, PartOutcome::Saved { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes()
            .iter()
            .filter(|o| matches!(o, PartOutcome::Failed { .. }))
            .count()
    }
}

/// Stores inline binary output as artifacts.
#[derive(Debug, Clone)]
pub struct SaveArtifactsPlugin {
    name: String,
}

impl SaveArtifactsPlugin {
    pub fn new() -> Self {
        Self::with_name(DEFAULT_PLUGIN_NAME)
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Persist every inline-data part of `output` and report per-part outcomes.
    ///
    /// Store failures are logged and recorded; they never abort the pass.
    pub async fn capture(&self, ctx: &InvocationContext, output: &Content) -> CaptureReport {
        let Some(store) = ctx.artifact_service.as_deref() else {
            warn!(
                plugin = %self.name,
                "Artifact service is not set, artifact capture is disabled"
            );
            return CaptureReport::Disabled;
        };

        let mut outcomes = Vec::with_capacity(output.parts.len());
        for (index, part) in output.parts.iter().enumerate() {
            outcomes.push(capture_part(store, ctx, index, part).await);
        }
        CaptureReport::Processed(outcomes)
    }
}

impl Default for SaveArtifactsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

async fn capture_part(
    store: &dyn ArtifactService,
    ctx: &InvocationContext,
    index: usize,
    part: &Part,
) -> PartOutcome {
    let Some(blob) = part.as_inline_data() else {
        return PartOutcome::Skipped { index };
    };

    let (filename, name_generated) = match blob.display_name() {
        Some(name) => (name.to_string(), false),
        None => {
            let name = generated_filename(&ctx.invocation_id, index);
            info!(index, filename = %name, "No display name found, using generated filename");
            (name, true)
        }
    };

    let (mime_type, mime_defaulted) = match blob.mime_type() {
        Some(mime) => (mime.to_string(), false),
        None => {
            warn!(filename = %filename, "Empty MIME type, using {}", DEFAULT_MIME_TYPE);
            (DEFAULT_MIME_TYPE.to_string(), true)
        }
    };

    // The store receives its own copy; the output keeps flowing unchanged.
    let mut stored = blob.clone();
    stored.mime_type = Some(mime_type.clone());

    match store
        .save_artifact(
            &ctx.app_name,
            &ctx.user_id,
            &ctx.session_id,
            &filename,
            Part::inline_data(stored),
        )
        .await
    {
        Ok(version) => {
            info!(filename = %filename, mime_type = %mime_type, version, "Saved artifact");
            PartOutcome::Saved {
                index,
                filename,
                mime_type,
                version,
                name_generated,
                mime_defaulted,
            }
        }
        Err(e) => {
            error!(index, filename = %filename, error = %e, "Failed to save artifact");
            PartOutcome::Failed {
                index,
                filename,
                error: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl Plugin for SaveArtifactsPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    async fn on_agent_output(&self, ctx: &InvocationContext, output: &Content) -> OutputSignal {
        let report = self.capture(ctx, output).await;
        debug!(
            plugin = %self.name,
            invocation_id = %ctx.invocation_id,
            saved = report.saved_count(),
            failed = report.failed_count(),
            "Artifact capture finished"
        );
        OutputSignal::Unmodified
    }
}

#[cfg(test)]
#[path = "save_artifacts_tests.rs"]
mod tests;

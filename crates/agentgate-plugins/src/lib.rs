//! # AgentGate Plugins
//!
//! Callbacks the orchestration engine runs at turn boundaries.
//!
//! - [`SaveArtifactsPlugin`] persists inline binary output as named artifacts.
//! - [`PluginManager`] holds registered plugins and runs them in order.

mod manager;
mod save_artifacts;

#[cfg(test)]
pub(crate) mod test_support;

pub use manager::PluginManager;
pub use save_artifacts::{
    generated_filename, CaptureReport, PartOutcome, SaveArtifactsPlugin,
    DEFAULT_PLUGIN_NAME,
};

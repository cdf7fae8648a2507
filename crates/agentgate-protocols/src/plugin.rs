//! Plugin protocol definitions.
//!
//! Plugins are invoked by the orchestration engine at turn boundaries.

use async_trait::async_trait;

use crate::invocation::InvocationContext;
use crate::types::Content;

/// What a plugin did to a turn's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSignal {
    /// Forward the original output untouched.
    Unmodified,
    /// Forward this content instead of the original.
    Replaced(Content),
}

impl OutputSignal {
    pub fn is_unmodified(&self) -> bool {
        matches!(self, OutputSignal::Unmodified)
    }
}

/// Core trait for turn callbacks.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Unique plugin name.
    fn name(&self) -> &str;

    /// Called once per turn after the agent produced `output`.
    async fn on_agent_output(&self, ctx: &InvocationContext, output: &Content) -> OutputSignal;
}

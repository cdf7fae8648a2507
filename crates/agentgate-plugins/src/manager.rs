//! Plugin registration and dispatch.

use std::sync::Arc;

use tracing::{debug, info};

use agentgate_protocols::{Content, InvocationContext, OutputSignal, Plugin, PluginError};

/// Ordered collection of turn plugins.
///
/// Plugins run in registration order. The first plugin that replaces the
/// output wins and later plugins are not consulted.
#[derive(Default)]
pub struct PluginManager {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin. Names must be unique and non-blank.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) -> Result<(), PluginError> {
        let name = plugin.name().to_string();
        if name.trim().is_empty() {
            return Err(PluginError::InvalidName(name));
        }
        if self.contains(&name) {
            return Err(PluginError::Duplicate(name));
        }
        info!(plugin = %name, "Plugin registered");
        self.plugins.push(plugin);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    /// Registered plugin names in run order.
    pub fn names(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Run every plugin's output hook and return the content to forward.
    pub async fn run_agent_output(&self, ctx: &InvocationContext, output: Content) -> Content {
        for plugin in &self.plugins {
            if let OutputSignal::Replaced(content) = plugin.on_agent_output(ctx, &output).await {
                debug!(
                    plugin = plugin.name(),
                    invocation_id = %ctx.invocation_id,
                    "Plugin replaced agent output"
                );
                return content;
            }
        }
        output
    }
}

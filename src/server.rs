//! Server initialization and startup logic for AgentGate.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, warn};

use agentgate_api::{ApiServer, AppState};
use agentgate_config::{Config, ConfigLoader, ConfigValidator};
use agentgate_plugins::{PluginManager, SaveArtifactsPlugin};
use agentgate_services::Services;

/// Defaults, file, environment, then CLI flags.
pub(crate) fn load_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = ConfigLoader::resolve(path)?;
    apply_overrides(&mut config, host, port);
    Ok(config)
}

pub(crate) fn apply_overrides(config: &mut Config, host: Option<String>, port: Option<u16>) {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
}

/// Plugins run on every turn, in this order.
pub(crate) fn build_plugins() -> Result<PluginManager, Box<dyn std::error::Error>> {
    let mut plugins = PluginManager::new();
    plugins.register(Arc::new(SaveArtifactsPlugin::new()))?;
    Ok(plugins)
}

pub(crate) fn build_state(config: Config) -> Result<Arc<AppState>, Box<dyn std::error::Error>> {
    let services = Services::in_memory();
    info!("Session service initialized (in-memory)");
    info!("Artifact service initialized (in-memory)");
    info!("Memory service initialized (in-memory)");
    info!("Credential service initialized (in-memory)");

    let plugins = build_plugins()?;
    info!(plugins = ?plugins.names(), "Plugins registered");

    Ok(Arc::new(AppState::new(
        Arc::new(config),
        services,
        Arc::new(plugins),
    )))
}

/// Startup banner lines.
pub(crate) fn banner(config: &Config) -> Vec<String> {
    let base = format!("http://{}:{}", config.server.host, config.server.port);
    vec![
        format!("AgentGate v{}", env!("CARGO_PKG_VERSION")),
        format!("Environment: {}", config.server.environment),
        format!("Model: {}", config.model.name),
        format!("Agents: {}", config.agents.names().join(", ")),
        format!("Session DB: {}", config.session.db_url),
        format!("Server: {}", base),
        format!("Health: {}/health", base),
        format!("Docs: {}/openapi.json", base),
    ]
}

/// Write the startup banner.
pub(crate) fn print_banner(out: &mut impl Write, config: &Config) -> std::io::Result<()> {
    let lines = banner(config);
    let width = lines.iter().map(String::len).max().unwrap_or(0);
    writeln!(out, "{}", "=".repeat(width))?;
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", "=".repeat(width))
}

/// Validate, then serve until shutdown.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(&config);
    for warning in &result.warnings {
        warn!(field = %warning.path, "{}", warning.message);
    }
    for err in &result.errors {
        error!(field = %err.path, "{}", err.message);
    }
    result.into_result()?;

    print_banner(&mut std::io::stdout().lock(), &config)?;

    let state = build_state(config)?;
    let server = ApiServer::from_state(state);
    server.run().await
}

/// Print validation results. Returns whether the configuration is usable.
pub(crate) fn check_config(config: &Config) -> bool {
    let result = ConfigValidator::validate(config);
    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for err in &result.errors {
        eprintln!("error: {}: {}", err.path, err.message);
    }
    if result.is_valid() {
        println!(
            "Configuration OK ({} warning(s))",
            result.warnings.len()
        );
    }
    result.is_valid()
}

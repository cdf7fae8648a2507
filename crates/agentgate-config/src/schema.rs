//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub cloud: CloudConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub agents: AgentsConfig,
}

/// Deployment environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Environment {
    Development,
    Production,
    Other(String),
}

impl Environment {
    pub fn as_str(&self) -> &str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Other(name) => name,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "development" => Environment::Development,
            "production" => Environment::Production,
            _ => Environment::Other(value),
        }
    }
}

impl From<Environment> for String {
    fn from(value: Environment) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// CORS origins. `*` allows any origin.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Whether CORS accepts any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8010
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

/// Model selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model")]
    pub name: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Session persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_db_url")]
    pub db_url: String,
}

impl SessionConfig {
    /// URL scheme, e.g. `sqlite`.
    pub fn scheme(&self) -> Option<&str> {
        self.db_url
            .split_once("://")
            .map(|(scheme, _)| scheme)
            .filter(|scheme| !scheme.is_empty())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            db_url: default_db_url(),
        }
    }
}

fn default_db_url() -> String {
    "sqlite:///./sessions.db".to_string()
}

/// Cloud project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(default = "default_location")]
    pub location: String,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            project: None,
            location: default_location(),
        }
    }
}

fn default_location() -> String {
    "us-central1".to_string()
}

/// Log output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit structured JSON logs for cloud log ingestion.
    #[serde(default)]
    pub cloud_logging: bool,

    /// Directory for daily-rotated log files. No file output when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Hosted agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsConfig {
    #[serde(default = "default_agents_dir")]
    pub dir: PathBuf,

    /// Agent name to description.
    #[serde(default = "default_catalog")]
    pub catalog: BTreeMap<String, String>,
}

impl AgentsConfig {
    /// Agent names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.catalog.keys().cloned().collect()
    }
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            dir: default_agents_dir(),
            catalog: default_catalog(),
        }
    }
}

fn default_agents_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_catalog() -> BTreeMap<String, String> {
    BTreeMap::from([(
        "movie_pitch_agent".to_string(),
        "Movie pitch generation with iterative refinement using multi-agent workflows"
            .to_string(),
    )])
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;

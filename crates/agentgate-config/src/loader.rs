//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::schema::{Config, Environment};

/// Environment variables read by [`ConfigLoader::apply_env`].
pub const ENV_VARS: &[&str] = &[
    "MODEL",
    "HOST",
    "PORT",
    "ENVIRONMENT",
    "SESSION_DB_URL",
    "ALLOWED_ORIGINS",
    "GOOGLE_CLOUD_PROJECT",
    "GOOGLE_CLOUD_LOCATION",
    "ENABLE_CLOUD_LOGGING",
    "LOG_DIR",
    "AGENTS_DIR",
];

/// Configuration loader with environment variable substitution and overrides.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Defaults, then the optional file, then the process environment.
    pub fn resolve(path: Option<&Path>) -> Result<Config, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Config::default(),
        };
        Self::apply_env(&mut config)?;
        Ok(config)
    }

    /// Override fields from the process environment.
    pub fn apply_env(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_env_with(config, |name| std::env::var(name).ok())
    }

    /// Override fields from `lookup`, which maps a variable name to its value.
    pub fn apply_env_with<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup("MODEL") {
            config.model.name = model;
        }
        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.server.port = port.trim().parse::<u16>().map_err(|e| {
                ConfigError::InvalidValue {
                    field: "PORT".to_string(),
                    message: e.to_string(),
                }
            })?;
        }
        if let Some(environment) = lookup("ENVIRONMENT") {
            config.server.environment = Environment::from(environment);
        }
        if let Some(db_url) = lookup("SESSION_DB_URL") {
            config.session.db_url = db_url;
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            config.server.allowed_origins = Self::parse_origins(&origins);
        }
        if let Some(project) = lookup("GOOGLE_CLOUD_PROJECT") {
            config.cloud.project = Some(project).filter(|p| !p.trim().is_empty());
        }
        if let Some(location) = lookup("GOOGLE_CLOUD_LOCATION") {
            config.cloud.location = location;
        }
        if let Some(flag) = lookup("ENABLE_CLOUD_LOGGING") {
            config.logging.cloud_logging = flag.to_lowercase() == "true";
        }
        if let Some(dir) = lookup("LOG_DIR") {
            config.logging.dir = Some(PathBuf::from(Self::expand_path(&dir)));
        }
        if let Some(dir) = lookup("AGENTS_DIR") {
            config.agents.dir = PathBuf::from(Self::expand_path(&dir));
        }
        Ok(())
    }

    /// Split a comma-separated origin list, trimming each entry.
    pub fn parse_origins(value: &str) -> Vec<String> {
        value.split(',').map(|o| o.trim().to_string()).collect()
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/logs`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

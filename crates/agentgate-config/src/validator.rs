//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::{Config, Environment};

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Convert into an error when any validation error was recorded.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.first() {
            None => Ok(self.warnings),
            Some(first) => Err(ConfigError::InvalidValue {
                field: first.path.clone(),
                message: first.message.clone(),
            }),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_session(config, &mut result);
        Self::validate_logging(config, &mut result);
        Self::validate_agents(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.trim().is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }

        if config.server.allowed_origins.is_empty() {
            result.add_error(ValidationError::new(
                "server.allowed_origins",
                "At least one origin is required",
            ));
        }

        for (i, origin) in config.server.allowed_origins.iter().enumerate() {
            if origin.is_empty() {
                result.add_error(ValidationError::new(
                    format!("server.allowed_origins[{}]", i),
                    "Origin cannot be empty",
                ));
            }
        }

        if let Environment::Other(name) = &config.server.environment {
            result.add_warning(ValidationWarning::new(
                "server.environment",
                format!("Unknown environment '{}', expected development or production", name),
            ));
        }

        if config.server.environment.is_production() && config.server.allows_any_origin() {
            result.add_warning(ValidationWarning::new(
                "server.allowed_origins",
                "Wildcard CORS origin in production",
            ));
        }
    }

    fn validate_session(config: &Config, result: &mut ValidationResult) {
        if config.session.scheme().is_none() {
            result.add_error(ValidationError::new(
                "session.db_url",
                format!("'{}' is not a URL with a scheme", config.session.db_url),
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        if config.logging.cloud_logging && config.cloud.project.is_none() {
            result.add_warning(ValidationWarning::new(
                "logging.cloud_logging",
                "Cloud logging is enabled but GOOGLE_CLOUD_PROJECT is not set",
            ));
        }
    }

    fn validate_agents(config: &Config, result: &mut ValidationResult) {
        if config.agents.catalog.is_empty() {
            result.add_warning(ValidationWarning::new(
                "agents.catalog",
                "No agents are configured",
            ));
        }
    }
}

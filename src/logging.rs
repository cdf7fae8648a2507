//! Tracing initialization.

use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use agentgate_config::Config;

/// Keeps the file writer alive for the program duration.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Console output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConsoleFormat {
    Text,
    /// Structured JSON for cloud log ingestion.
    Json,
}

/// JSON output needs both the cloud logging flag and a project. The
/// validator warns when the flag is set without one.
pub(crate) fn console_format(config: &Config) -> ConsoleFormat {
    if config.logging.cloud_logging && config.cloud.project.is_some() {
        ConsoleFormat::Json
    } else {
        ConsoleFormat::Text
    }
}

/// Initialize tracing with console output and optional daily-rotated files.
pub(crate) fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format = console_format(config);
    let (json_layer, text_layer) = match format {
        ConsoleFormat::Json => (Some(fmt::layer().json().with_target(true)), None),
        ConsoleFormat::Text => (None, Some(fmt::layer().with_target(true).with_ansi(true))),
    };

    let file_layer = match &config.logging.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("agentgate")
                .filename_suffix("log")
                .max_log_files(30)
                .build(dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().with_writer(writer).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(file_layer)
        .init();

    Ok(())
}

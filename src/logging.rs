//! Logging System
//!
//! Structured logging using the `tracing` crate. Logs go to stderr or a file, never to
//! stdout, which carries the patch report. Logging is off unless asked for.

use crate::error::PatchError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding an `EnvFilter` directive; overrides the configured level.
pub const LOG_FILTER_ENV: &str = "DEPLOYMENT_PATCH_LOG";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path, required when output is "file"
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on stderr only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "off".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LogOutput {
    Stderr,
    File(PathBuf),
}

impl LoggingConfig {
    /// Check format, output and level without installing anything.
    pub fn validate(&self) -> Result<(), PatchError> {
        parse_format(&self.format)?;
        parse_output(&self.output, self.file.as_ref())?;
        EnvFilter::try_new(&self.level)
            .map_err(|e| PatchError::Logging(format!("invalid log level '{}': {}", self.level, e)))?;
        Ok(())
    }
}

/// Initialize the global tracing subscriber.
///
/// `DEPLOYMENT_PATCH_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<(), PatchError> {
    let filter = build_env_filter(config)?;
    let format = parse_format(&config.format)?;
    let output = parse_output(&config.output, config.file.as_ref())?;

    let (writer, ansi) = match output {
        LogOutput::Stderr => (BoxMakeWriter::new(std::io::stderr), config.color),
        LogOutput::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PatchError::Logging(format!("failed to create log directory: {}", e))
                })?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    PatchError::Logging(format!("failed to open log file {:?}: {}", path, e))
                })?;
            (BoxMakeWriter::new(Arc::new(file)), false)
        }
    };

    let subscriber = Registry::default().with(filter);
    let installed = match format {
        LogFormat::Json => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .try_init(),
    };

    installed.map_err(|e| PatchError::Logging(e.to_string()))
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, PatchError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_FILTER_ENV) {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| PatchError::Logging(format!("invalid log level '{}': {}", config.level, e)))
}

fn parse_format(format: &str) -> Result<LogFormat, PatchError> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        other => Err(PatchError::Logging(format!(
            "invalid log format: {} (must be 'json' or 'text')",
            other
        ))),
    }
}

fn parse_output(output: &str, file: Option<&PathBuf>) -> Result<LogOutput, PatchError> {
    match (output, file) {
        ("stderr", _) => Ok(LogOutput::Stderr),
        ("file", Some(path)) => Ok(LogOutput::File(path.clone())),
        ("file", None) => Err(PatchError::Logging(
            "log output 'file' requires a log file path".to_string(),
        )),
        (other, _) => Err(PatchError::Logging(format!(
            "invalid log output: {} (must be 'stderr' or 'file')",
            other
        ))),
    }
}

//! Configuration for the produce service
//!
//! Provides environment presets, validation, and the command-line/env
//! parser used by the binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Accepted log levels, lowest to highest severity.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
    /// JSON when stdout is not a terminal, text otherwise
    Auto,
}

/// Produce service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Deployment environment name ("dev", "prod", ...)
    pub env: String,
    /// Default log level when `RUST_LOG` is unset
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// JSON array of items loaded into the catalog at startup
    pub init_file: Option<PathBuf>,
}

impl Config {
    /// Local development: verbose text logs
    pub fn development() -> Self {
        Self {
            env: "dev".into(),
            log_level: "debug".into(),
            log_format: LogFormat::Text,
            init_file: None,
        }
    }

    /// Production: info-level JSON logs
    pub fn production() -> Self {
        Self {
            env: "prod".into(),
            log_level: "info".into(),
            log_format: LogFormat::Json,
            init_file: None,
        }
    }

    /// Use `path` as the init file.
    pub fn with_init_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.init_file = Some(path.into());
        self
    }

    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.env.trim().is_empty() {
            return Err("env must not be empty".into());
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(format!(
                "log_level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }
        if let Some(path) = &self.init_file {
            if path.as_os_str().is_empty() {
                return Err("init_file must not be empty when set".into());
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self { Self::development() }
}

/// Command-line arguments. Every flag falls back to an environment variable.
#[derive(Debug, Parser)]
#[command(name = "ramdb-produce", version, about = "Load and list the produce catalog")]
pub struct Cli {
    /// Deployment environment name
    #[arg(long, env = "RAMDB_ENV", default_value = "dev")]
    pub env: String,

    /// Default log level (trace, debug, info, warn, error)
    #[arg(long, env = "RAMDB_LOG_LEVEL", default_value = "debug")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "RAMDB_LOG_FORMAT", value_enum, default_value_t = LogFormat::Auto)]
    pub log_format: LogFormat,

    /// JSON file of items to load at startup
    #[arg(long, env = "RAMDB_INIT_FILE")]
    pub init_file: Option<PathBuf>,
}

impl Cli {
    /// Resolve into a `Config`.
    pub fn into_config(self) -> Config {
        Config {
            env: self.env,
            log_level: self.log_level,
            log_format: self.log_format,
            init_file: self.init_file,
        }
    }
}

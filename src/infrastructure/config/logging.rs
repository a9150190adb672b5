//! Logging configuration and initialization.

use std::fs::OpenOptions;
use std::sync::Mutex;

use serde::Deserialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
    /// Optional plain-text log file, appended to.
    pub file: Option<String>,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Events go to stderr so command output on stdout stays parseable.
    /// `RUST_LOG` takes precedence over `level`. A second call is a no-op.
    pub fn init(&self) -> Result<()> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let file_layer = match &self.file {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| ConfigError::InvalidValue {
                        field: "logging.file",
                        reason: e.to_string(),
                    })?;
                Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            }
            None => None,
        };

        let registry = tracing_subscriber::registry().with(filter).with(file_layer);
        let _ = match self.format.as_str() {
            "json" => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
            _ => registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init(),
        };
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
            file: None,
        }
    }
}

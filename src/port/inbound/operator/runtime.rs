//! Runtime control projection types for operator-facing adapters.
//!
//! Defines request and response types for pipeline runs, either a single
//! pass or the scheduled loop.

use async_trait::async_trait;

use crate::domain::RunSummary;
use crate::error::Result;

/// Runtime configuration overrides from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,

    /// Override for how many days back the search window reaches.
    pub days_back: Option<u32>,

    /// Keep running on an interval instead of a single pass.
    pub schedule: bool,

    /// Override for the scheduled interval in hours.
    pub interval_hours: Option<u64>,

    /// Override for log level (e.g., "debug", "info", "warn").
    pub log_level: Option<String>,

    /// Whether to output logs as JSON.
    pub json_logs: bool,
}

/// Startup information snapshot for display.
#[derive(Debug, Clone)]
pub struct RunStartupSnapshot {
    pub area_name: String,
    pub days_back: u32,
    pub data_directory: String,
    /// Interval in hours when running scheduled.
    pub interval_hours: Option<u64>,
    pub sentinel_hub_enabled: bool,
}

/// How a run ended.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// A single pass finished and wrote this summary.
    Completed(Box<RunSummary>),
    /// The scheduled loop was stopped after this many passes.
    Stopped { runs: u64 },
}

/// Runtime control use-cases for operator-facing adapters.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait RuntimeOperator: Send + Sync {
    /// Prepare a startup snapshot from runtime overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot>;

    /// Execute a single pipeline pass or the scheduled loop.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization fails or a single pass fails.
    async fn execute_run(&self, request: RunRequest) -> Result<RunOutcome>;
}

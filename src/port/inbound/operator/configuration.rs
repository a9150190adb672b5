//! Configuration projections for operator-facing adapters.

use std::path::Path;

use crate::error::Result;

/// Area section of a configuration view.
#[derive(Debug, Clone)]
pub struct ConfigArea {
    pub name: String,
    pub vertex_count: usize,
    /// `[min_lon, min_lat, max_lon, max_lat]`.
    pub bounds: [f64; 4],
    pub wkt: String,
}

/// Sentinel Hub section of a configuration view. Secrets are never projected.
#[derive(Debug, Clone)]
pub struct ConfigSentinelHub {
    pub enabled: bool,
    pub instance_id: Option<String>,
    pub base_url: String,
    pub token_url: String,
}

/// Full configuration projection for operator-facing output.
#[derive(Debug, Clone)]
pub struct ConfigView {
    pub data_directory: String,
    pub area: ConfigArea,
    pub days_back: u32,
    pub max_cloud_cover: u8,
    pub asf_search_url: String,
    pub asf_max_results: usize,
    pub download_directory: String,
    pub auth_domains: Vec<String>,
    pub sentinel_hub: ConfigSentinelHub,
    pub resolution: f64,
    pub bbox_size_km: f64,
    pub interval_hours: u64,
    pub retry_delay_secs: u64,
    pub log_level: String,
    pub log_format: String,
    pub log_file: Option<String>,
}

/// Validation output for `config validate`.
#[derive(Debug, Clone, Default)]
pub struct ConfigValidationReport {
    pub warnings: Vec<String>,
}

/// Result of `config init`.
#[derive(Debug, Clone)]
pub struct ConfigInitReport {
    pub config_path: String,
    /// Directories created (or already present) for pipeline output.
    pub directories: Vec<String>,
    /// Path of the `.env` template when one was written.
    pub env_template: Option<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `config show`.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Validate config and return non-fatal warnings.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;

    /// Create the data directories named by the config at `config_path` and a
    /// `.env` template next to it unless one exists.
    fn provision_workspace(&self, config_toml: &str, config_path: &Path)
        -> Result<ConfigInitReport>;
}

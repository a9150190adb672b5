//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for Sentinel Hub credentials (`SH_CLIENT_ID`, `SH_CLIENT_SECRET`,
//! `SH_INSTANCE_ID`). Earthdata credentials are never read from the file.
//!
//! # Example
//!
//! ```no_run
//! use sarwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging()?;
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::area::AreaConfig;
use super::logging::LoggingConfig;
use super::pipeline::{ProcessingConfig, ScheduleConfig, TemporalRangeConfig};
use super::sources::{AsfConfig, EarthdataConfig, SentinelHubConfig};
use crate::application::pipeline::PipelineSettings;
use crate::domain::AreaOfInterest;
use crate::error::{ConfigError, Result};

pub const SH_CLIENT_ID_VAR: &str = "SH_CLIENT_ID";
pub const SH_CLIENT_SECRET_VAR: &str = "SH_CLIENT_SECRET";
pub const SH_INSTANCE_ID_VAR: &str = "SH_INSTANCE_ID";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Both validate before returning.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Root for metadata records and run summaries.
    #[serde(default = "default_data_directory")]
    pub data_directory: String,

    /// Monitored polygon. Required.
    #[serde(default)]
    pub area_of_interest: Option<AreaConfig>,

    #[serde(default)]
    pub temporal_range: TemporalRangeConfig,

    #[serde(default)]
    pub sentinel_hub: SentinelHubConfig,

    #[serde(default)]
    pub asf: AsfConfig,

    #[serde(default)]
    pub earthdata: EarthdataConfig,

    #[serde(default)]
    pub processing: ProcessingConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_data_directory() -> String {
    "./sar_data".to_string()
}

impl Config {
    /// Parse configuration from TOML content, applying `SH_*` overrides from
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration using `lookup` for environment overrides.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_env(
        content: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(client_id) = get(SH_CLIENT_ID_VAR) {
            config.sentinel_hub.client_id = client_id;
        }
        if let Some(secret) = get(SH_CLIENT_SECRET_VAR) {
            config.sentinel_hub.client_secret = secret;
        }
        if let Some(instance) = get(SH_INSTANCE_ID_VAR) {
            config.sentinel_hub.instance_id = instance;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.data_directory.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "data_directory",
            }
            .into());
        }
        let Some(area) = &self.area_of_interest else {
            return Err(ConfigError::MissingField {
                field: "area_of_interest",
            }
            .into());
        };
        area.to_domain()?;

        if self.temporal_range.days_back == 0 {
            return Err(ConfigError::InvalidValue {
                field: "temporal_range.days_back",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.temporal_range.max_cloud_cover > 100 {
            return Err(ConfigError::InvalidValue {
                field: "temporal_range.max_cloud_cover",
                reason: "must be a percentage between 0 and 100".to_string(),
            }
            .into());
        }
        if self.asf.max_results == 0 {
            return Err(ConfigError::InvalidValue {
                field: "asf.max_results",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.asf.search_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "asf.search_url",
            }
            .into());
        }
        if self.asf.download_directory.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "asf.download_directory",
            }
            .into());
        }
        if self.earthdata.auth_domains.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "earthdata.auth_domains",
                reason: "at least one domain is required".to_string(),
            }
            .into());
        }
        if !(self.processing.resolution > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "processing.resolution",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.processing.bbox_size_km < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "processing.bbox_size_km",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }
        if self.schedule.interval_hours == 0 {
            return Err(ConfigError::InvalidValue {
                field: "schedule.interval_hours",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.schedule.retry_delay_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "schedule.retry_delay_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Non-fatal issues worth reporting to an operator.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.sentinel_hub.client_id.trim().is_empty() {
            warnings.push("Sentinel Hub client_id not configured".to_string());
        }
        if self.sentinel_hub.client_secret.trim().is_empty() {
            warnings.push("Sentinel Hub client_secret not configured".to_string());
        }
        if self.sentinel_hub.instance_id.trim().is_empty() {
            warnings.push(
                "No Instance ID provided - using Copernicus Data Space Ecosystem mode".to_string(),
            );
        }
        if !self.data_dir().exists() {
            warnings.push(format!(
                "Data directory does not exist: {}",
                self.data_directory
            ));
        }
        warnings
    }

    /// The validated area of interest.
    #[allow(clippy::result_large_err)]
    pub fn area(&self) -> Result<AreaOfInterest> {
        self.area_of_interest
            .as_ref()
            .ok_or(ConfigError::MissingField {
                field: "area_of_interest",
            })?
            .to_domain()
    }

    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_directory)
    }

    #[must_use]
    pub fn download_dir(&self) -> PathBuf {
        PathBuf::from(&self.asf.download_directory)
    }

    #[must_use]
    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            days_back: self.temporal_range.days_back,
            max_results: self.asf.max_results,
            resolution: self.processing.resolution,
        }
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) -> Result<()> {
        self.logging.init()
    }
}

//! Diagnostic projections for operator-facing adapters.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::port::outbound::auth::AuthMethod;

/// Summary output for `check config`.
#[derive(Debug, Clone)]
pub struct ConfigCheckReport {
    pub area_name: String,
    pub vertex_count: usize,
    pub days_back: u32,
    pub data_directory: String,
    pub data_directory_exists: bool,
    pub sentinel_hub_client_present: bool,
    pub sentinel_hub_secret_present: bool,
    pub sentinel_hub_instance_present: bool,
    pub edl_token_present: bool,
    pub asf_credentials_present: bool,
    pub warnings: Vec<String>,
}

impl ConfigCheckReport {
    /// True when the archive download stage has credentials to work with.
    #[must_use]
    pub const fn download_ready(&self) -> bool {
        self.edl_token_present || self.asf_credentials_present
    }
}

/// Output of an ASF catalog probe for `check connection`.
#[derive(Debug, Clone)]
pub struct CatalogProbe {
    pub catalog: String,
    pub search_url: String,
    pub window_days: u32,
    pub scenes_found: usize,
}

/// Output of a Sentinel Hub probe for `check connection`.
#[derive(Debug, Clone)]
pub enum PlannerProbe {
    /// No client credentials configured; the planner stage is skipped.
    NotConfigured,
    /// The token endpoint accepted the configured client.
    Authorized { token_url: String },
}

/// Output of `check auth`.
#[derive(Debug, Clone)]
pub struct AuthReport {
    pub method: AuthMethod,
    pub probe_granule: String,
    /// Download URL of the probe granule when the catalog knows it.
    pub probe_url: Option<String>,
}

/// Presence of one credential variable.
#[derive(Debug, Clone)]
pub struct EnvVariable {
    pub name: &'static str,
    /// Masked value when the variable is set.
    pub masked: Option<String>,
}

/// Shape analysis of `EDL_TOKEN`.
#[derive(Debug, Clone)]
pub struct TokenShape {
    pub length: usize,
    pub segments: usize,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenShape {
    /// A JWT has three dot-separated segments.
    #[must_use]
    pub const fn is_jwt(&self) -> bool {
        self.segments == 3
    }

    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

/// Output of `check env`.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentReport {
    pub variables: Vec<EnvVariable>,
    pub token: Option<TokenShape>,
}

/// Diagnostics use-cases for operator-facing adapters.
#[async_trait]
pub trait DiagnosticOperator: Send + Sync {
    /// Build `check config` summary.
    fn check_config(&self, config_toml: &str) -> Result<ConfigCheckReport>;

    /// Search the scene catalog over a short recent window.
    async fn probe_catalog(&self, config_toml: &str) -> Result<CatalogProbe>;

    /// Fetch a Sentinel Hub token when credentials are configured.
    async fn probe_planner(&self, config_toml: &str) -> Result<PlannerProbe>;

    /// Verify archive credentials and look up a known granule.
    async fn check_auth(&self, config_toml: &str) -> Result<AuthReport>;

    /// Inspect credential environment variables.
    fn check_environment(&self) -> EnvironmentReport;
}

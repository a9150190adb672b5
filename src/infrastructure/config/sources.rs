//! Remote data source sections: ASF, Earthdata Login and Sentinel Hub.

use serde::Deserialize;

use crate::adapter::outbound::asf::DEFAULT_SEARCH_URL;
use crate::adapter::outbound::copernicus::{
    SentinelHubSettings, DEFAULT_BASE_URL, DEFAULT_TOKEN_URL,
};
use crate::adapter::outbound::earthdata::LoginSettings;

/// `[asf]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AsfConfig {
    /// Root for `raw_zip/` and `safe_extracted/`.
    pub download_directory: String,
    pub max_results: usize,
    pub search_url: String,
}

impl Default for AsfConfig {
    fn default() -> Self {
        Self {
            download_directory: "./sar_data".to_string(),
            max_results: 100,
            search_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}

/// `[earthdata]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EarthdataConfig {
    pub auth_domains: Vec<String>,
    pub urs_url: String,
    pub auth_host: String,
    pub client_id: String,
}

impl Default for EarthdataConfig {
    fn default() -> Self {
        let login = LoginSettings::default();
        Self {
            auth_domains: login.auth_domains,
            urs_url: login.urs_url,
            auth_host: login.auth_host,
            client_id: login.client_id,
        }
    }
}

impl EarthdataConfig {
    #[must_use]
    pub fn login_settings(&self) -> LoginSettings {
        LoginSettings {
            urs_url: self.urs_url.clone(),
            auth_host: self.auth_host.clone(),
            client_id: self.client_id.clone(),
            auth_domains: self.auth_domains.clone(),
        }
    }
}

/// `[sentinel_hub]`. Credentials are normally supplied through
/// `SH_CLIENT_ID`, `SH_CLIENT_SECRET` and `SH_INSTANCE_ID`.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct SentinelHubConfig {
    pub instance_id: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(alias = "sh_base_url")]
    pub base_url: String,
    #[serde(alias = "sh_token_url")]
    pub token_url: String,
}

impl Default for SentinelHubConfig {
    fn default() -> Self {
        Self {
            instance_id: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for SentinelHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentinelHubConfig")
            .field("instance_id", &self.instance_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("base_url", &self.base_url)
            .field("token_url", &self.token_url)
            .finish()
    }
}

impl SentinelHubConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.client_id.trim().is_empty()
    }

    #[must_use]
    pub fn settings(&self) -> SentinelHubSettings {
        SentinelHubSettings {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            instance_id: Some(self.instance_id.clone()).filter(|id| !id.trim().is_empty()),
            base_url: self.base_url.clone(),
            token_url: self.token_url.clone(),
        }
    }
}

//! Diagnostic operator implementation.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::{debug, info};

use crate::adapter::outbound::asf::AsfCatalog;
use crate::adapter::outbound::copernicus::CopernicusPlanner;
use crate::adapter::outbound::earthdata::{
    token_expiry, token_segments, ASF_PASSWORD_VAR, ASF_USERNAME_VAR, EDL_TOKEN_VAR,
};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config;
use crate::infrastructure::config::settings::{
    SH_CLIENT_ID_VAR, SH_CLIENT_SECRET_VAR, SH_INSTANCE_ID_VAR,
};
use crate::port::inbound::operator::diagnostic::{
    AuthReport, CatalogProbe, ConfigCheckReport, DiagnosticOperator, EnvVariable,
    EnvironmentReport, PlannerProbe, TokenShape,
};
use crate::port::{CredentialVerifier, ProcessingPlanner, SceneCatalog, SearchQuery};

use super::{entry::Operator, shared};

/// Days covered by the connectivity search.
const PROBE_WINDOW_DAYS: u32 = 7;

/// Known granule used to confirm authenticated catalog access.
pub const PROBE_GRANULE: &str = "S1A_IW_SLC__1SDV_20250714T154854_20250714T154920_060082_077700_D5A5";

#[async_trait]
impl DiagnosticOperator for Operator {
    fn check_config(&self, config_toml: &str) -> Result<ConfigCheckReport> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        let area = config.area()?;

        Ok(ConfigCheckReport {
            area_name: area.name().to_string(),
            vertex_count: area.vertex_count(),
            days_back: config.temporal_range.days_back,
            data_directory: config.data_directory.clone(),
            data_directory_exists: config.data_dir().is_dir(),
            sentinel_hub_client_present: !config.sentinel_hub.client_id.trim().is_empty(),
            sentinel_hub_secret_present: !config.sentinel_hub.client_secret.trim().is_empty(),
            sentinel_hub_instance_present: !config.sentinel_hub.instance_id.trim().is_empty(),
            edl_token_present: shared::env_present(EDL_TOKEN_VAR),
            asf_credentials_present: shared::env_present(ASF_USERNAME_VAR)
                && shared::env_present(ASF_PASSWORD_VAR),
            warnings: config.warnings(),
        })
    }

    async fn probe_catalog(&self, config_toml: &str) -> Result<CatalogProbe> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        let area = config.area()?;
        let catalog = AsfCatalog::new(&config.asf.search_url)?;

        let end = Utc::now().naive_utc();
        let start = end - Duration::days(i64::from(PROBE_WINDOW_DAYS));
        let query = SearchQuery {
            area_wkt: area.to_wkt(),
            start,
            end,
            max_results: config.asf.max_results,
        };
        let scenes = catalog.search(&query).await?;
        info!(scenes = scenes.len(), "Catalog probe complete");

        Ok(CatalogProbe {
            catalog: catalog.name().to_string(),
            search_url: catalog.search_url().to_string(),
            window_days: PROBE_WINDOW_DAYS,
            scenes_found: scenes.len(),
        })
    }

    async fn probe_planner(&self, config_toml: &str) -> Result<PlannerProbe> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        let settings = config.sentinel_hub.settings();
        let token_url = settings.token_url.clone();
        let planner = CopernicusPlanner::new(settings);

        if !planner.is_configured() {
            return Ok(PlannerProbe::NotConfigured);
        }
        planner.verify_access().await?;
        Ok(PlannerProbe::Authorized { token_url })
    }

    async fn check_auth(&self, config_toml: &str) -> Result<AuthReport> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        let session = bootstrap::build_session(&config)?;
        let method = session.verify().await?;
        debug!(method = %method, "Credentials verified");

        let catalog = AsfCatalog::new(&config.asf.search_url)?;
        let probe_url = catalog
            .lookup_granules(&[PROBE_GRANULE.to_string()])
            .await?
            .into_iter()
            .find(|scene| scene.granule_name == PROBE_GRANULE)
            .map(|scene| scene.url)
            .filter(|url| !url.is_empty());

        Ok(AuthReport {
            method,
            probe_granule: PROBE_GRANULE.to_string(),
            probe_url,
        })
    }

    fn check_environment(&self) -> EnvironmentReport {
        let variables = [
            EDL_TOKEN_VAR,
            ASF_USERNAME_VAR,
            ASF_PASSWORD_VAR,
            SH_CLIENT_ID_VAR,
            SH_CLIENT_SECRET_VAR,
            SH_INSTANCE_ID_VAR,
        ]
        .into_iter()
        .map(|name| EnvVariable {
            name,
            masked: std::env::var(name)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(|value| shared::mask_variable(name, &value)),
        })
        .collect();

        let token = std::env::var(EDL_TOKEN_VAR)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(|value| TokenShape {
                length: value.chars().count(),
                segments: token_segments(&value),
                expires_at: token_expiry(&value),
            });

        EnvironmentReport { variables, token }
    }
}

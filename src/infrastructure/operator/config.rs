//! Configuration operator implementation.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::adapter::outbound::earthdata::{ASF_PASSWORD_VAR, ASF_USERNAME_VAR, EDL_TOKEN_VAR};
use crate::adapter::outbound::filesystem::{REQUEST_DIR, SCENE_DIR};
use crate::error::Result;
use crate::infrastructure::config;
use crate::infrastructure::config::settings::{
    SH_CLIENT_ID_VAR, SH_CLIENT_SECRET_VAR, SH_INSTANCE_ID_VAR,
};
use crate::port::inbound::operator::configuration::{
    ConfigArea, ConfigInitReport, ConfigSentinelHub, ConfigValidationReport, ConfigView,
    ConfigurationOperator,
};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        let area = config.area()?;
        let sentinel_hub = config.sentinel_hub.settings();

        Ok(ConfigView {
            data_directory: config.data_directory.clone(),
            area: ConfigArea {
                name: area.name().to_string(),
                vertex_count: area.vertex_count(),
                bounds: area.bounds().to_array(),
                wkt: area.to_wkt(),
            },
            days_back: config.temporal_range.days_back,
            max_cloud_cover: config.temporal_range.max_cloud_cover,
            asf_search_url: config.asf.search_url.clone(),
            asf_max_results: config.asf.max_results,
            download_directory: config.asf.download_directory.clone(),
            auth_domains: config.earthdata.auth_domains.clone(),
            sentinel_hub: ConfigSentinelHub {
                enabled: config.sentinel_hub.is_configured(),
                instance_id: sentinel_hub.instance_id,
                base_url: sentinel_hub.base_url,
                token_url: sentinel_hub.token_url,
            },
            resolution: config.processing.resolution,
            bbox_size_km: config.processing.bbox_size_km,
            interval_hours: config.schedule.interval_hours,
            retry_delay_secs: config.schedule.retry_delay_secs,
            log_level: config.logging.level.clone(),
            log_format: config.logging.format.clone(),
            log_file: config.logging.file.clone(),
        })
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        Ok(ConfigValidationReport {
            warnings: config.warnings(),
        })
    }

    fn provision_workspace(
        &self,
        config_toml: &str,
        config_path: &Path,
    ) -> Result<ConfigInitReport> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        let data_dir = config.data_dir();

        let mut directories = Vec::new();
        for dir in [
            data_dir.clone(),
            data_dir.join(SCENE_DIR),
            data_dir.join(REQUEST_DIR),
            config.download_dir(),
        ] {
            fs::create_dir_all(&dir)?;
            let display = dir.display().to_string();
            if !directories.contains(&display) {
                directories.push(display);
            }
        }

        let env_path = config_path
            .parent()
            .map_or_else(|| Path::new(".").join(".env"), |parent| parent.join(".env"));
        let env_template = if env_path.exists() {
            None
        } else {
            fs::write(&env_path, env_template())?;
            info!(path = %env_path.display(), "Wrote environment template");
            Some(env_path.display().to_string())
        };

        Ok(ConfigInitReport {
            config_path: config_path.display().to_string(),
            directories,
            env_template,
        })
    }
}

fn env_template() -> String {
    format!(
        "# Sentinel Hub (Copernicus Data Space Ecosystem)\n\
         {SH_CLIENT_ID_VAR}=\n\
         {SH_CLIENT_SECRET_VAR}=\n\
         {SH_INSTANCE_ID_VAR}=\n\
         \n\
         # Earthdata Login: a token, or ASF username and password\n\
         # {EDL_TOKEN_VAR}=\n\
         # {ASF_USERNAME_VAR}=\n\
         # {ASF_PASSWORD_VAR}=\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_template_lists_every_secret() {
        let template = env_template();
        for name in [
            SH_CLIENT_ID_VAR,
            SH_CLIENT_SECRET_VAR,
            SH_INSTANCE_ID_VAR,
            EDL_TOKEN_VAR,
            ASF_USERNAME_VAR,
            ASF_PASSWORD_VAR,
        ] {
            assert!(template.contains(name), "missing {name}");
        }
        assert!(template.contains("\n# EDL_TOKEN="));
    }
}

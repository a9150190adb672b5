//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::{diagnostic, operator, output};
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
pub(crate) const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    let report = operator::operator()?.provision_workspace(CONFIG_TEMPLATE, path)?;

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", &report.config_path);
    for dir in &report.directories {
        output::field("Directory", dir);
    }
    match &report.env_template {
        Some(env) => output::field("Env template", env),
        None => output::note("Existing .env left untouched"),
    }

    output::section("Next Steps");
    output::note(&format!(
        "1. Edit {} with your area of interest",
        path.display()
    ));
    output::note("2. Set SH_CLIENT_ID / SH_CLIENT_SECRET and EDL_TOKEN in .env");
    output::note(&format!(
        "3. Run: sarwatch check config -c {}",
        path.display()
    ));
    output::note(&format!("4. Run: sarwatch run -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(path)?;
    let config = operator::operator()?
        .show_config(&config_toml)
        .inspect_err(|e| {
            diagnostic::render_config_error(e, &path.display().to_string(), &config_toml);
        })?;

    output::section("Effective Configuration");
    output::field("Data", &config.data_directory);

    output::section("Area of Interest");
    output::field("Name", &config.area.name);
    output::field("Vertices", config.area.vertex_count);
    let [min_lon, min_lat, max_lon, max_lat] = config.area.bounds;
    output::field(
        "Bounds",
        format!("{min_lon:.5}, {min_lat:.5} → {max_lon:.5}, {max_lat:.5}"),
    );
    if output::verbosity() > 0 {
        output::field("WKT", &config.area.wkt);
    }

    output::section("Search");
    output::field("Days back", config.days_back);
    output::field("Max cloud", format!("{}%", config.max_cloud_cover));
    output::field("ASF search", &config.asf_search_url);
    output::field("Max results", config.asf_max_results);
    output::field("Downloads", &config.download_directory);
    output::field("Auth domains", config.auth_domains.join(", "));

    output::section("Sentinel Hub");
    if config.sentinel_hub.enabled {
        output::success("Client credentials configured");
    } else {
        output::warning("Client credentials not set (processing requests skipped)");
    }
    output::field(
        "Mode",
        config
            .sentinel_hub
            .instance_id
            .as_deref()
            .map_or_else(|| "CDSE".to_string(), |id| format!("instance {id}")),
    );
    output::field("Base URL", &config.sentinel_hub.base_url);
    output::field("Token URL", &config.sentinel_hub.token_url);

    output::section("Processing");
    output::field("Resolution", format!("{} m", config.resolution));
    output::field("BBox size", format!("{} km", config.bbox_size_km));

    output::section("Schedule");
    output::field("Interval", format!("{}h", config.interval_hours));
    output::field("Retry delay", format!("{}s", config.retry_delay_secs));

    output::section("Logging");
    output::field("Level", &config.log_level);
    output::field("Format", &config.log_format);
    output::field("File", config.log_file.as_deref().unwrap_or("(stderr only)"));

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config_toml = operator::read_config_toml(path)?;
    let validation = operator::operator()?
        .validate_config(&config_toml)
        .inspect_err(|e| {
            diagnostic::render_config_error(e, &path.display().to_string(), &config_toml);
        })?;
    output::success("Config file is valid");

    if !validation.warnings.is_empty() {
        output::section("Warnings");
        for warning in &validation.warnings {
            output::warning(warning);
        }
    }

    output::field(
        "Next",
        format!("sarwatch config show -c {}", path.display()),
    );

    Ok(())
}

use std::path::Path;

use crate::adapter::inbound::cli::{diagnostic, operator, output};
use crate::error::Result;

/// Validate the configuration file and report credential presence.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config_toml = operator::read_config_toml(path)?;
    let report = operator::operator()?
        .check_config(&config_toml)
        .inspect_err(|e| {
            diagnostic::render_config_error(e, &path.display().to_string(), &config_toml);
        })?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Area", &report.area_name);
    output::field("Vertices", report.vertex_count);
    output::field("Days back", report.days_back);
    output::field("Data", &report.data_directory);
    if !report.data_directory_exists {
        output::hint("run `sarwatch config init` or the first `sarwatch run` to create it");
    }

    output::section("Sentinel Hub");
    if report.sentinel_hub_client_present && report.sentinel_hub_secret_present {
        output::success("Client credentials detected");
    } else {
        if !report.sentinel_hub_client_present {
            output::field("Missing", "SH_CLIENT_ID");
        }
        if !report.sentinel_hub_secret_present {
            output::field("Missing", "SH_CLIENT_SECRET");
        }
    }
    output::field(
        "Mode",
        if report.sentinel_hub_instance_present {
            "Sentinel Hub instance"
        } else {
            "CDSE"
        },
    );

    output::section("Earthdata");
    if report.edl_token_present {
        output::success("EDL_TOKEN detected");
    } else if report.asf_credentials_present {
        output::success("ASF_USERNAME / ASF_PASSWORD detected");
    } else {
        output::warning("No Earthdata credentials (set EDL_TOKEN to enable downloads)");
    }

    if !report.warnings.is_empty() {
        output::section("Warnings");
        for warning in &report.warnings {
            output::warning(warning);
        }
    }

    output::success("Configuration check complete");

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::port::inbound::operator::diagnostic::ConfigCheckReport;

    fn report(token: bool, basic: bool) -> ConfigCheckReport {
        ConfigCheckReport {
            area_name: "harbor".to_string(),
            vertex_count: 4,
            days_back: 7,
            data_directory: "./sar_data".to_string(),
            data_directory_exists: false,
            sentinel_hub_client_present: false,
            sentinel_hub_secret_present: false,
            sentinel_hub_instance_present: false,
            edl_token_present: token,
            asf_credentials_present: basic,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn download_ready_with_either_credential() {
        assert!(report(true, false).download_ready());
        assert!(report(false, true).download_ready());
        assert!(!report(false, false).download_ready());
    }
}

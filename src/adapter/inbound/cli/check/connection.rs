use std::path::Path;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;
use crate::port::inbound::operator::diagnostic::PlannerProbe;

/// Search ASF over a recent window and request a Sentinel Hub token.
pub async fn execute_connection<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let service = operator::operator()?;
    let config_toml = operator::read_config_toml(config_path.as_ref())?;

    output::section("Connection Check");

    let pb = output::spinner("Searching ASF catalog...");
    match service.probe_catalog(&config_toml).await {
        Ok(probe) => {
            output::spinner_success(
                &pb,
                &format!(
                    "ASF search returned {} scenes over the last {} days",
                    probe.scenes_found, probe.window_days
                ),
            );
            output::field("Catalog", &probe.catalog);
            output::field("Search URL", &probe.search_url);
        }
        Err(e) => {
            output::spinner_fail(&pb, "ASF search failed");
            return Err(e);
        }
    }

    let pb = output::spinner("Requesting Sentinel Hub token...");
    match service.probe_planner(&config_toml).await {
        Ok(PlannerProbe::Authorized { token_url }) => {
            output::spinner_success(&pb, "Sentinel Hub token issued");
            output::field("Token URL", token_url);
        }
        Ok(PlannerProbe::NotConfigured) => {
            output::spinner_success(&pb, "Sentinel Hub not configured, skipped");
            output::hint("set SH_CLIENT_ID and SH_CLIENT_SECRET to enable processing requests");
        }
        Err(e) => {
            output::spinner_fail(&pb, "Sentinel Hub authentication failed");
            return Err(e);
        }
    }

    output::success("Connection checks passed");

    Ok(())
}

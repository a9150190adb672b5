use std::path::Path;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;

/// Verify Earthdata credentials and look up a known granule.
pub async fn execute_auth<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let service = operator::operator()?;
    let config_toml = operator::read_config_toml(config_path.as_ref())?;

    output::section("Authentication Check");

    let pb = output::spinner("Verifying Earthdata credentials...");
    let report = match service.check_auth(&config_toml).await {
        Ok(report) => {
            output::spinner_success(&pb, "Earthdata credentials accepted");
            report
        }
        Err(e) => {
            output::spinner_fail(&pb, "Earthdata authentication failed");
            return Err(e);
        }
    };

    output::field("Method", report.method);
    output::field("Granule", &report.probe_granule);
    match &report.probe_url {
        Some(url) => {
            output::success("Granule found in catalog");
            output::field("URL", output::muted(url));
        }
        None => output::warning("Probe granule not returned by the catalog"),
    }

    output::success("Authentication check complete");

    Ok(())
}

//! Handler for the `download` command.

use indicatif::ProgressBar;
use parking_lot::Mutex;
use serde_json::json;

use crate::adapter::inbound::cli::command::DownloadArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::domain::Scene;
use crate::error::{AcquisitionError, Result};
use crate::port::inbound::operator::acquisition::{
    AcquisitionEvents, DownloadReport, DownloadRequest, ProductSource, SceneOutcome, SceneStatus,
};
use crate::port::TransferProgress;

/// Execute the download command.
pub async fn execute(args: &DownloadArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(&args.config)?;
    let request = DownloadRequest {
        config_toml,
        metadata_dir: args.metadata_dir.clone(),
        download_dir: args.download_dir.clone(),
        max_scenes: usize::try_from(args.max_scenes).ok(),
    };

    output::header(env!("CARGO_PKG_VERSION"));
    let events = ProgressEvents::default();
    let report = operator::operator()?.download(request, &events).await?;
    print_report(&report);

    match failure(&report) {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Error for a report in which some scenes failed.
fn failure(report: &DownloadReport) -> Option<AcquisitionError> {
    let total = report.outcomes.len();
    let failed = total - report.ready_count();
    (failed > 0).then_some(AcquisitionError::Incomplete { failed, total })
}

/// Renders acquisition events as terminal output and a byte progress bar.
#[derive(Default)]
struct ProgressEvents {
    bar: Mutex<Option<ProgressBar>>,
}

impl AcquisitionEvents for ProgressEvents {
    fn scene_started(&self, index: usize, total: usize, scene: &Scene) {
        output::section(&format!("Scene {}/{}", index + 1, total));
        output::field("Granule", output::highlight(&scene.granule_name));
        output::field("Acquired", &scene.acquisition_date);
        if scene.size_mb > 0.0 {
            output::field("Size", format!("{:.2} GB", scene.size_gb()));
        }
    }

    fn transfer_started(&self, scene: &Scene) {
        output::action("Downloading", &scene.zip_file_name());
    }

    fn transfer_progress(&self, progress: TransferProgress) {
        let mut bar = self.bar.lock();
        let bar = bar.get_or_insert_with(|| output::transfer_bar("Downloading", progress.total));
        bar.set_position(progress.downloaded);
    }

    fn scene_finished(&self, outcome: &SceneOutcome) {
        if let Some(bar) = self.bar.lock().take() {
            bar.finish_and_clear();
        }

        match &outcome.status {
            SceneStatus::Ready { product, source } => {
                let verb = match source {
                    ProductSource::Extracted => "Found",
                    ProductSource::Archived => "Extracted",
                    ProductSource::Downloaded => "Downloaded",
                };
                output::action_done(verb, &product.name());
                let polarizations: Vec<&str> = product
                    .polarizations()
                    .iter()
                    .map(|p| p.as_str())
                    .collect();
                output::field("Polarizations", polarizations.join(", "));
                output::field("Measurements", product.measurement_count);
                output::field(
                    "Raster size",
                    format!("{:.2} GB", product.total_measurement_gb()),
                );
                output::field("Path", product.path.display());
            }
            SceneStatus::Failed(reason) => output::warning(&format!(
                "{} failed: {}",
                outcome.granule, reason
            )),
        }
    }
}

fn print_report(report: &DownloadReport) {
    if output::is_json() {
        let scenes: Vec<_> = report
            .outcomes
            .iter()
            .map(|outcome| match &outcome.status {
                SceneStatus::Ready { product, source } => json!({
                    "granule": outcome.granule,
                    "status": "ready",
                    "source": format!("{source:?}").to_lowercase(),
                    "path": product.path.display().to_string(),
                    "polarizations": product
                        .polarizations()
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>(),
                }),
                SceneStatus::Failed(reason) => json!({
                    "granule": outcome.granule,
                    "status": "failed",
                    "error": reason,
                }),
            })
            .collect();
        output::json_output(json!({
            "type": "download",
            "payload": {
                "auth_method": report.auth_method.map(|method| method.to_string()),
                "metadata_dir": report.metadata_dir.display().to_string(),
                "ready": report.ready_count(),
                "total": report.outcomes.len(),
                "scenes": scenes,
            },
        }));
        return;
    }

    output::section("Summary");
    if let Some(method) = report.auth_method {
        output::field("Auth", method);
    }
    output::field("Metadata", report.metadata_dir.display());
    if report.outcomes.is_empty() {
        output::warning("No scene metadata found");
        output::hint("run `sarwatch run` first to search for scenes");
        return;
    }
    output::field(
        "Ready",
        format!("{}/{}", report.ready_count(), report.outcomes.len()),
    );
    if report.ready_count() == report.outcomes.len() {
        output::success("All products ready for analysis");
    }
}

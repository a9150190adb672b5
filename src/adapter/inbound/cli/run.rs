//! Handler for the `run` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::domain::RunSummary;
use crate::error::Result;
use crate::port::inbound::operator::runtime::{RunOutcome, RunRequest, RunStartupSnapshot};

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(&args.config)?;
    let machine_output = output::is_json();
    let request = build_run_request(args, config_toml, machine_output);
    let service = operator::operator()?;

    let startup = service.prepare_run(&request)?;
    print_startup_config(&startup);

    match service.execute_run(request).await? {
        RunOutcome::Completed(summary) => print_summary(&summary),
        RunOutcome::Stopped { runs } => {
            output::section("Stopped");
            output::field("Runs", runs);
        }
    }
    Ok(())
}

fn build_run_request(args: &RunArgs, config_toml: String, force_json_logs: bool) -> RunRequest {
    RunRequest {
        config_toml,
        days_back: args.days_back,
        schedule: args.schedule,
        interval_hours: args.interval,
        log_level: args.log_level.clone(),
        json_logs: args.json_logs || force_json_logs,
    }
}

fn print_startup_config(snapshot: &RunStartupSnapshot) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Area", &snapshot.area_name);
    output::field("Days back", snapshot.days_back);
    output::field("Data", &snapshot.data_directory);
    output::field(
        "Sentinel Hub",
        if snapshot.sentinel_hub_enabled {
            "enabled"
        } else {
            "not configured"
        },
    );
    match snapshot.interval_hours {
        Some(hours) => output::field("Schedule", format!("every {hours}h")),
        None => output::field("Schedule", "single run"),
    }
}

fn print_summary(summary: &RunSummary) {
    if output::is_json() {
        output::json_output(json!({
            "type": "summary",
            "payload": summary,
        }));
        return;
    }

    output::section("Run Summary");
    output::field("Run", output::muted(&summary.run_id));
    output::field(
        "Window",
        format!(
            "{} → {}",
            summary.time_range.start.format("%Y-%m-%d %H:%M"),
            summary.time_range.end.format("%Y-%m-%d %H:%M")
        ),
    );
    output::field(
        "ASF",
        format!(
            "{} found, {} selected, {} saved",
            summary.asf_results.found, summary.asf_results.selected, summary.asf_results.downloaded
        ),
    );
    output::field(
        "Sentinel Hub",
        format!(
            "{} found, {} saved",
            summary.sentinel_hub_results.found, summary.sentinel_hub_results.processed
        ),
    );
    output::field("Files", summary.total_files);

    if summary.selected_scenes.is_empty() {
        output::warning("No scenes selected in the search window");
    } else {
        for granule in &summary.selected_scenes {
            output::note(granule);
        }
        output::hint("run `sarwatch download` to fetch the selected products");
    }
}

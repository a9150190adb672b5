//! Pipeline run summary record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Prefix shared by all summary files; metadata readers skip these.
pub const SUMMARY_FILE_PREFIX: &str = "pipeline_summary";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCounts {
    pub found: usize,
    pub selected: usize,
    pub downloaded: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerCounts {
    pub found: usize,
    pub processed: usize,
}

/// Outcome of one retrieval pipeline execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: String,
    pub execution_time: NaiveDateTime,
    pub time_range: TimeRange,
    pub target_days_back: u32,
    pub asf_results: CatalogCounts,
    pub sentinel_hub_results: PlannerCounts,
    pub total_files: usize,
    pub selected_scenes: Vec<String>,
}

impl RunSummary {
    /// `pipeline_summary_<YYYYmmdd_HHMMSS>.json`
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{SUMMARY_FILE_PREFIX}_{}.json",
            self.execution_time.format("%Y%m%d_%H%M%S")
        )
    }
}

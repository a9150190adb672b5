//! Interval scheduler around the retrieval pipeline.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{error, info};

use super::pipeline::RetrievalPipeline;

/// Delays between scheduled passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSettings {
    /// Delay after a successful pass.
    pub interval: Duration,
    /// Delay after a failed pass.
    pub retry_delay: Duration,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(24 * 3600),
            retry_delay: Duration::from_secs(3600),
        }
    }
}

/// Runs the pipeline until shutdown is signalled.
pub struct Scheduler {
    pipeline: Arc<RetrievalPipeline>,
    settings: ScheduleSettings,
    days_back: Option<u32>,
}

impl Scheduler {
    pub fn new(pipeline: Arc<RetrievalPipeline>, settings: ScheduleSettings) -> Self {
        Self {
            pipeline,
            settings,
            days_back: None,
        }
    }

    /// Override the window length used for every pass.
    #[must_use]
    pub const fn with_days_back(mut self, days_back: Option<u32>) -> Self {
        self.days_back = days_back;
        self
    }

    /// Loop until `shutdown` flips to `true` (or its sender is dropped).
    ///
    /// A pass in flight is allowed to finish; sleeps are interrupted.
    /// Returns the number of passes started.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> u64 {
        info!(
            interval_secs = self.settings.interval.as_secs(),
            retry_secs = self.settings.retry_delay.as_secs(),
            "Scheduler started"
        );
        let mut runs = 0u64;

        loop {
            if *shutdown.borrow() {
                break;
            }

            runs += 1;
            let delay = match self.pipeline.run(self.days_back).await {
                Ok(summary) => {
                    info!(
                        run = runs,
                        run_id = %summary.run_id,
                        total_files = summary.total_files,
                        "Scheduled run completed"
                    );
                    self.settings.interval
                }
                Err(e) => {
                    error!(run = runs, error = %e, "Scheduled run failed");
                    self.settings.retry_delay
                }
            };

            info!(next_in_secs = delay.as_secs(), "Waiting for next run");
            tokio::select! {
                () = tokio::time::sleep(delay) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!(runs, "Scheduler stopped");
        runs
    }
}

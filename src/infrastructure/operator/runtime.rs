//! Runtime operator implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::signal;
use tokio::sync::watch;
use tracing::info;

use crate::application::scheduler::Scheduler;
use crate::error::Result;
use crate::infrastructure::{bootstrap, config};
use crate::port::inbound::operator::runtime::{
    RunOutcome, RunRequest, RunStartupSnapshot, RuntimeOperator,
};

use super::{entry::Operator, shared};

#[async_trait]
impl RuntimeOperator for Operator {
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot> {
        let config = self.load_run_config(request)?;
        let area = config.area()?;

        Ok(RunStartupSnapshot {
            area_name: area.name().to_string(),
            days_back: request.days_back.unwrap_or(config.temporal_range.days_back),
            data_directory: config.data_directory.clone(),
            interval_hours: request
                .schedule
                .then(|| request.interval_hours.unwrap_or(config.schedule.interval_hours)),
            sentinel_hub_enabled: config.sentinel_hub.is_configured(),
        })
    }

    async fn execute_run(&self, request: RunRequest) -> Result<RunOutcome> {
        let config = self.load_run_config(&request)?;
        config.init_logging()?;

        info!(
            area = config.area_of_interest.as_ref().map_or("", |area| area.name.as_str()),
            days_back = request.days_back.unwrap_or(config.temporal_range.days_back),
            schedule = request.schedule,
            "sarwatch starting"
        );

        let pipeline = Arc::new(bootstrap::build_pipeline(&config)?);

        if !request.schedule {
            let summary = pipeline.run(request.days_back).await?;
            info!(run_id = %summary.run_id, files = summary.total_files, "sarwatch finished");
            return Ok(RunOutcome::Completed(Box::new(summary)));
        }

        let scheduler = Scheduler::new(pipeline, config.schedule.settings(request.interval_hours))
            .with_days_back(request.days_back);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let mut handle = tokio::spawn(async move { scheduler.run(shutdown_rx).await });

        tokio::select! {
            result = &mut handle => {
                let runs = shared::map_app_result(result)?;
                info!(runs, "sarwatch stopped");
                return Ok(RunOutcome::Stopped { runs });
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received (Ctrl+C)");
                let _ = shutdown_tx.send(true);
            }
        }

        let runs = shared::map_app_result(handle.await)?;
        info!(runs, "sarwatch stopped");
        Ok(RunOutcome::Stopped { runs })
    }
}

impl Operator {
    fn load_run_config(&self, request: &RunRequest) -> Result<config::settings::Config> {
        let mut config = config::settings::Config::parse_toml(&request.config_toml)?;
        Self::apply_run_overrides(&mut config, request);
        Ok(config)
    }

    fn apply_run_overrides(config: &mut config::settings::Config, request: &RunRequest) {
        if let Some(days_back) = request.days_back {
            config.temporal_range.days_back = days_back;
        }

        if let Some(interval_hours) = request.interval_hours {
            config.schedule.interval_hours = interval_hours;
        }

        if let Some(ref log_level) = request.log_level {
            config.logging.level = log_level.clone();
        }

        if request.json_logs {
            config.logging.format = "json".to_string();
        }
    }
}

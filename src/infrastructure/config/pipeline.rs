//! Temporal, processing and schedule sections.

use std::time::Duration;

use serde::Deserialize;

use crate::application::scheduler::ScheduleSettings;

/// `[temporal_range]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemporalRangeConfig {
    pub days_back: u32,
    /// Percent. Recorded for optical follow-ups; radar is unaffected by cloud.
    pub max_cloud_cover: u8,
}

impl Default for TemporalRangeConfig {
    fn default() -> Self {
        Self {
            days_back: 7,
            max_cloud_cover: 20,
        }
    }
}

/// `[processing]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Meters per pixel.
    pub resolution: f64,
    pub bbox_size_km: f64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            resolution: 10.0,
            bbox_size_km: 40.0,
        }
    }
}

/// `[schedule]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub interval_hours: u64,
    pub retry_delay_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_hours: 24,
            retry_delay_secs: 3600,
        }
    }
}

impl ScheduleConfig {
    #[must_use]
    pub fn settings(&self, interval_override: Option<u64>) -> ScheduleSettings {
        let hours = interval_override.unwrap_or(self.interval_hours);
        ScheduleSettings {
            interval: Duration::from_secs(hours.saturating_mul(3600)),
            retry_delay: Duration::from_secs(self.retry_delay_secs),
        }
    }
}

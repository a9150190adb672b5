//! Retrieval pipeline: search, select, persist.
//!
//! One pass searches the scene catalog over `[now - days_back, now]`, asks
//! the processing planner for raster requests, selects the scene pair used
//! for change detection, persists the selected records and writes a run
//! summary.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime, Utc};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::summary::{CatalogCounts, PlannerCounts, TimeRange};
use crate::domain::{select_scene_pair, AreaOfInterest, ProcessingRequest, RunSummary, Scene};
use crate::error::Result;
use crate::port::{
    MetadataStore, PlanQuery, ProcessingPlanner, SceneCatalog, SearchQuery, Stored,
};

/// Tunables for a pipeline pass.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Default search window length in days.
    pub days_back: u32,
    /// Catalog result cap.
    pub max_results: usize,
    /// Raster resolution in meters per pixel for planned requests.
    pub resolution: f64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            days_back: 7,
            max_results: 100,
            resolution: 10.0,
        }
    }
}

/// The retrieval use case.
pub struct RetrievalPipeline {
    area: AreaOfInterest,
    settings: PipelineSettings,
    catalog: Arc<dyn SceneCatalog>,
    planner: Arc<dyn ProcessingPlanner>,
    store: Arc<dyn MetadataStore>,
}

impl RetrievalPipeline {
    pub fn new(
        area: AreaOfInterest,
        settings: PipelineSettings,
        catalog: Arc<dyn SceneCatalog>,
        planner: Arc<dyn ProcessingPlanner>,
        store: Arc<dyn MetadataStore>,
    ) -> Self {
        Self {
            area,
            settings,
            catalog,
            planner,
            store,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    #[must_use]
    pub const fn area(&self) -> &AreaOfInterest {
        &self.area
    }

    /// Run one pass anchored at the current UTC time.
    pub async fn run(&self, days_back: Option<u32>) -> Result<RunSummary> {
        self.run_at(Utc::now().naive_utc(), days_back).await
    }

    /// Run one pass anchored at `now`.
    ///
    /// Catalog and planner failures are logged and counted as empty results.
    ///
    /// # Errors
    ///
    /// Fails when `days_back` is zero, when the store cannot be prepared, or
    /// when the summary cannot be written.
    pub async fn run_at(&self, now: NaiveDateTime, days_back: Option<u32>) -> Result<RunSummary> {
        let days_back = days_back.unwrap_or(self.settings.days_back);
        if days_back == 0 {
            return Err(DomainError::ZeroDaysBack.into());
        }

        let start = now - Duration::days(i64::from(days_back));
        info!(
            area = %self.area.name(),
            start = %start,
            end = %now,
            days_back,
            "Starting retrieval pipeline"
        );

        self.store.prepare()?;

        let scenes = self.search_catalog(start, now).await;
        let requests = self.plan_requests(start, now).await;

        let selected: Vec<Scene> = match select_scene_pair(&scenes, now, days_back) {
            Some(pair) => pair.scenes().into_iter().cloned().collect(),
            None => {
                warn!("No scenes available for selection");
                Vec::new()
            }
        };

        let downloaded = selected
            .iter()
            .filter(|scene| self.persist_scene(scene))
            .count();
        let processed = requests
            .iter()
            .filter(|request| request.search_ready)
            .filter(|request| self.persist_request(request))
            .count();

        let summary = RunSummary {
            run_id: Uuid::new_v4().to_string(),
            execution_time: now,
            time_range: TimeRange { start, end: now },
            target_days_back: days_back,
            asf_results: CatalogCounts {
                found: scenes.len(),
                selected: selected.len(),
                downloaded,
            },
            sentinel_hub_results: PlannerCounts {
                found: requests.len(),
                processed,
            },
            total_files: downloaded + processed,
            selected_scenes: selected
                .iter()
                .map(|scene| scene.granule_name.clone())
                .collect(),
        };

        let path = self.store.save_summary(&summary)?;
        info!(
            path = %path.display(),
            total_files = summary.total_files,
            "Pipeline completed"
        );
        Ok(summary)
    }

    async fn search_catalog(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<Scene> {
        let query = SearchQuery {
            area_wkt: self.area.to_wkt(),
            start,
            end,
            max_results: self.settings.max_results,
        };
        match self.catalog.search(&query).await {
            Ok(scenes) => {
                info!(catalog = self.catalog.name(), count = scenes.len(), "Catalog search finished");
                scenes
            }
            Err(e) => {
                error!(catalog = self.catalog.name(), error = %e, "Catalog search failed");
                Vec::new()
            }
        }
    }

    async fn plan_requests(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<ProcessingRequest> {
        if !self.planner.is_configured() {
            warn!(planner = self.planner.name(), "Planner credentials not configured, skipping");
            return Vec::new();
        }
        let query = PlanQuery {
            bbox: self.area.bounds(),
            start,
            end,
            resolution: self.settings.resolution,
        };
        match self.planner.plan(&query).await {
            Ok(requests) => {
                info!(planner = self.planner.name(), count = requests.len(), "Processing requests prepared");
                requests
            }
            Err(e) => {
                error!(planner = self.planner.name(), error = %e, "Planning failed");
                Vec::new()
            }
        }
    }

    /// True when the record exists after the call.
    fn persist_scene(&self, scene: &Scene) -> bool {
        match self.store.save_scene(scene) {
            Ok(Stored::Created(path)) => {
                info!(granule = %scene.granule_name, path = %path.display(), "Saved scene metadata");
                true
            }
            Ok(Stored::AlreadyPresent(path)) => {
                debug!(granule = %scene.granule_name, path = %path.display(), "Scene metadata already present");
                true
            }
            Err(e) => {
                error!(granule = %scene.granule_name, error = %e, "Failed to save scene metadata");
                false
            }
        }
    }

    fn persist_request(&self, request: &ProcessingRequest) -> bool {
        match self.store.save_request(request) {
            Ok(stored) => {
                info!(path = %stored.path().display(), "Saved processing request");
                true
            }
            Err(e) => {
                error!(time_range = %request.time_range, error = %e, "Failed to save processing request");
                false
            }
        }
    }
}

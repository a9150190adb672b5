//! Processing planner port (Sentinel Hub / CDSE).

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::{BoundingBox, ProcessingRequest};
use crate::error::Result;

/// Inputs for building processing requests.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanQuery {
    pub bbox: BoundingBox,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Ground resolution in meters per pixel.
    pub resolution: f64,
}

/// Builds processing requests for a raster service.
#[async_trait]
pub trait ProcessingPlanner: Send + Sync {
    /// Return the planner name for logging.
    fn name(&self) -> &'static str;

    /// True when credentials are configured and `plan` will produce requests.
    fn is_configured(&self) -> bool;

    /// Build the requests covering the query. Unconfigured planners return
    /// an empty list.
    async fn plan(&self, query: &PlanQuery) -> Result<Vec<ProcessingRequest>>;

    /// Confirm the configured credentials are accepted by the service.
    async fn verify_access(&self) -> Result<()>;
}

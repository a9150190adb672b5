//! Scene catalog port.
//!
//! A catalog answers "which acquisitions intersect this area in this window".
//! The ASF search API is the production implementation.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::Scene;
use crate::error::Result;

/// Spatial-temporal search parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Area polygon as WKT.
    pub area_wkt: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub max_results: usize,
}

/// Searchable archive of Sentinel-1 products.
///
/// # Errors
///
/// Both methods fail on transport errors, non-success responses, or payloads
/// that are not a feature collection.
#[async_trait]
pub trait SceneCatalog: Send + Sync {
    /// Return the catalog name for logging.
    fn name(&self) -> &'static str;

    /// Search SLC products intersecting the area within the window.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Scene>>;

    /// Look up specific granules by name.
    async fn lookup_granules(&self, granules: &[String]) -> Result<Vec<Scene>>;
}

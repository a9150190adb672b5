//! Sentinel Hub processing request descriptors.

use serde::{Deserialize, Serialize};

/// A prepared processing request against a Sentinel Hub collection.
///
/// The pipeline persists these descriptors so a later stage can submit them;
/// it does not fetch rasters itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingRequest {
    pub source: String,
    /// `[minx, miny, maxx, maxy]` in WGS84 degrees.
    pub bbox: [f64; 4],
    /// `<start>/<end>` interval.
    pub time_range: String,
    pub collection: String,
    pub evalscript: String,
    pub width: u32,
    pub height: u32,
    pub search_ready: bool,
    pub note: String,
}

impl ProcessingRequest {
    /// File stem for the persisted descriptor. Colons are replaced so the
    /// name is valid on every filesystem.
    #[must_use]
    pub fn file_stem(&self) -> String {
        format!(
            "sentinel_hub_{}",
            self.time_range.replace('/', "_to_").replace(':', "-")
        )
    }
}

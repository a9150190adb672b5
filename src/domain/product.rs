//! Extracted SAFE product model.
//!
//! A Sentinel-1 SAFE directory holds `manifest.safe` plus `annotation/`,
//! `measurement/` and `preview/` sub-directories. The measurement rasters are
//! what a change-detection stage consumes, indexed here by polarization.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::scene::Polarization;

/// Sub-directories every SAFE product must contain, in check order.
pub const REQUIRED_DIRECTORIES: [&str; 3] = ["annotation", "measurement", "preview"];

/// Manifest file at the SAFE root.
pub const MANIFEST_FILE: &str = "manifest.safe";

/// Extension of measurement rasters.
pub const MEASUREMENT_EXTENSION: &str = "tiff";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One measurement raster on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementFile {
    pub path: PathBuf,
    pub bytes: u64,
}

impl MeasurementFile {
    #[must_use]
    pub fn size_mb(&self) -> f64 {
        self.bytes as f64 / BYTES_PER_MB
    }
}

/// A verified, analysis-ready SAFE product.
#[derive(Debug, Clone, PartialEq)]
pub struct SafeProduct {
    pub path: PathBuf,
    pub measurements: BTreeMap<Polarization, MeasurementFile>,
    pub measurement_count: usize,
    pub annotation_entries: usize,
    pub preview_entries: usize,
    pub total_measurement_bytes: u64,
}

impl SafeProduct {
    #[must_use]
    pub fn polarizations(&self) -> Vec<Polarization> {
        self.measurements.keys().copied().collect()
    }

    #[must_use]
    pub fn total_measurement_gb(&self) -> f64 {
        self.total_measurement_bytes as f64 / (BYTES_PER_MB * 1024.0)
    }

    #[must_use]
    pub fn measurement(&self, polarization: Polarization) -> Option<&MeasurementFile> {
        self.measurements.get(&polarization)
    }

    /// Directory name, e.g. `S1A_..._D5A5.SAFE`.
    #[must_use]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Where a scene's product came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSource {
    /// Extracted SAFE directory was already present.
    Extracted,
    /// Zip archive was already present and has been extracted.
    Archived,
    /// Downloaded during this run.
    Downloaded,
}

/// Per-scene status of an acquisition.
#[derive(Debug, Clone)]
pub enum SceneStatus {
    Ready {
        product: SafeProduct,
        source: ProductSource,
    },
    Failed(String),
}

/// Outcome of acquiring one scene.
#[derive(Debug, Clone)]
pub struct SceneOutcome {
    pub granule: String,
    pub status: SceneStatus,
}

impl SceneOutcome {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.status, SceneStatus::Ready { .. })
    }
}

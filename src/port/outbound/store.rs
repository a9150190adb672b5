//! Persistence port for scene metadata, processing requests and run summaries.

use std::path::{Path, PathBuf};

use crate::domain::{ProcessingRequest, RunSummary, Scene};
use crate::error::Result;

/// Result of an idempotent write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stored {
    /// The record was written.
    Created(PathBuf),
    /// A record with the same key already existed and was left untouched.
    AlreadyPresent(PathBuf),
}

impl Stored {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(path) | Self::AlreadyPresent(path) => path,
        }
    }

    #[must_use]
    pub const fn is_new(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Storage operations for pipeline records.
pub trait MetadataStore: Send + Sync {
    /// Create the storage locations if they do not exist.
    fn prepare(&self) -> Result<()>;

    /// Save a scene metadata record keyed by granule name.
    fn save_scene(&self, scene: &Scene) -> Result<Stored>;

    /// Save a processing request descriptor keyed by its time range.
    fn save_request(&self, request: &ProcessingRequest) -> Result<Stored>;

    /// Save a run summary and return its location.
    fn save_summary(&self, summary: &RunSummary) -> Result<PathBuf>;

    /// Load stored scene records ordered by file name, at most `limit`.
    fn load_scenes(&self, limit: Option<usize>) -> Result<Vec<Scene>>;

    /// Where scene records live.
    fn scene_location(&self) -> &Path;
}

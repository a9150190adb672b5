//! Product acquisition use-cases: download, extract and verify SAFE products.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::Scene;
use crate::error::Result;
use crate::port::outbound::auth::AuthMethod;

pub use crate::domain::product::{ProductSource, SceneOutcome, SceneStatus};
pub use crate::port::outbound::events::{AcquisitionEvents, SilentEvents};

/// CLI overrides for `download`.
#[derive(Debug, Clone, Default)]
pub struct DownloadRequest {
    pub config_toml: String,
    /// Directory holding scene metadata records. Defaults to `<data_dir>/asf`.
    pub metadata_dir: Option<PathBuf>,
    /// Root for `raw_zip` and `safe_extracted`. Defaults to `asf.download_directory`.
    pub download_dir: Option<PathBuf>,
    pub max_scenes: Option<usize>,
}

/// Result of `download`.
#[derive(Debug, Clone)]
pub struct DownloadReport {
    pub auth_method: Option<AuthMethod>,
    pub metadata_dir: PathBuf,
    pub outcomes: Vec<SceneOutcome>,
}

impl DownloadReport {
    #[must_use]
    pub fn ready_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_ready()).count()
    }
}

/// Acquisition use-cases for operator-facing adapters.
#[async_trait]
pub trait AcquisitionOperator: Send + Sync {
    /// Authenticate, then acquire every stored scene record.
    async fn download(&self, request: DownloadRequest, events: &dyn AcquisitionEvents) -> Result<DownloadReport>;

    /// Load stored scene records for listing.
    fn list_scenes(&self, config_toml: &str, metadata_dir: Option<PathBuf>) -> Result<Vec<Scene>>;
}

//! Product acquisition: download, extract and verify SAFE products.
//!
//! Products land in two directories under the download root:
//! `raw_zip/<granule>.zip` and `safe_extracted/<granule>.SAFE`. Each step is
//! skipped when its output already exists, so re-running a download resumes
//! where the previous one stopped.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{ProductSource, SafeProduct, Scene, SceneOutcome, SceneStatus};
use crate::error::{AcquisitionError, Result};
use crate::port::{AcquisitionEvents, ProductArchive, ProductTransfer, TransferProgress};

pub const RAW_ZIP_DIR: &str = "raw_zip";
pub const SAFE_EXTRACTED_DIR: &str = "safe_extracted";

pub struct ProductAcquisition {
    raw_dir: PathBuf,
    safe_dir: PathBuf,
    transfer: Arc<dyn ProductTransfer>,
    archive: Arc<dyn ProductArchive>,
}

impl ProductAcquisition {
    /// Create the acquisition service and its directories.
    pub fn new(
        download_dir: &Path,
        transfer: Arc<dyn ProductTransfer>,
        archive: Arc<dyn ProductArchive>,
    ) -> Result<Self> {
        let raw_dir = download_dir.join(RAW_ZIP_DIR);
        let safe_dir = download_dir.join(SAFE_EXTRACTED_DIR);
        fs::create_dir_all(&raw_dir)?;
        fs::create_dir_all(&safe_dir)?;
        Ok(Self {
            raw_dir,
            safe_dir,
            transfer,
            archive,
        })
    }

    #[must_use]
    pub fn raw_dir(&self) -> &Path {
        &self.raw_dir
    }

    #[must_use]
    pub fn safe_dir(&self) -> &Path {
        &self.safe_dir
    }

    /// Make one scene's SAFE product available and verified.
    pub async fn acquire(
        &self,
        scene: &Scene,
        events: &dyn AcquisitionEvents,
    ) -> Result<(SafeProduct, ProductSource)> {
        scene.check_granule_name()?;
        let extracted = self.safe_dir.join(scene.safe_dir_name());
        if extracted.is_dir() {
            info!(granule = %scene.granule_name, "SAFE product already extracted");
            return Ok((self.archive.inspect(&extracted)?, ProductSource::Extracted));
        }

        let zip_path = self.raw_dir.join(scene.zip_file_name());
        if zip_path.is_file() {
            info!(granule = %scene.granule_name, "Archive already downloaded");
            return Ok((self.unpack(&zip_path)?, ProductSource::Archived));
        }

        if scene.url.is_empty() {
            return Err(AcquisitionError::MissingUrl {
                granule: scene.granule_name.clone(),
            }
            .into());
        }

        info!(granule = %scene.granule_name, size_gb = scene.size_gb(), "Downloading product");
        events.transfer_started(scene);
        let progress = |update: TransferProgress| events.transfer_progress(update);
        let bytes = self.transfer.fetch(&scene.url, &zip_path, &progress).await?;

        if !zip_path.is_file() {
            return Err(AcquisitionError::MissingDownload { path: zip_path }.into());
        }
        info!(granule = %scene.granule_name, bytes, "Download complete");

        Ok((self.unpack(&zip_path)?, ProductSource::Downloaded))
    }

    /// Acquire every scene in order. A failure is recorded and the next scene
    /// is attempted.
    pub async fn acquire_all(
        &self,
        scenes: &[Scene],
        events: &dyn AcquisitionEvents,
    ) -> Vec<SceneOutcome> {
        let total = scenes.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, scene) in scenes.iter().enumerate() {
            events.scene_started(index, total, scene);
            let status = match self.acquire(scene, events).await {
                Ok((product, source)) => SceneStatus::Ready { product, source },
                Err(e) => {
                    error!(granule = %scene.granule_name, error = %e, "Acquisition failed");
                    SceneStatus::Failed(e.to_string())
                }
            };
            let outcome = SceneOutcome {
                granule: scene.granule_name.clone(),
                status,
            };
            events.scene_finished(&outcome);
            outcomes.push(outcome);
        }

        outcomes
    }

    fn unpack(&self, zip_path: &Path) -> Result<SafeProduct> {
        let safe_path = self.archive.extract(zip_path, &self.safe_dir)?;
        let product = self.archive.inspect(&safe_path)?;
        info!(
            path = %product.path.display(),
            polarizations = ?product.polarizations(),
            "SAFE product verified"
        );
        Ok(product)
    }
}

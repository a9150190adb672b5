//! JSON file metadata store.
//!
//! Layout under the data directory:
//!
//! ```text
//! <data_dir>/asf/<granule>.json
//! <data_dir>/sentinel_hub/sentinel_hub_<start>_to_<end>.json
//! <data_dir>/pipeline_summary_<YYYYmmdd_HHMMSS>.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use crate::domain::summary::SUMMARY_FILE_PREFIX;
use crate::domain::{ProcessingRequest, RunSummary, Scene};
use crate::error::Result;
use crate::port::{MetadataStore, Stored};

pub const SCENE_DIR: &str = "asf";
pub const REQUEST_DIR: &str = "sentinel_hub";

#[derive(Debug, Clone)]
pub struct JsonMetadataStore {
    data_dir: PathBuf,
    scene_dir: PathBuf,
    request_dir: PathBuf,
}

impl JsonMetadataStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            scene_dir: data_dir.join(SCENE_DIR),
            request_dir: data_dir.join(REQUEST_DIR),
            data_dir,
        }
    }

    /// Read and write scene records in `scene_dir` instead of `<data_dir>/asf`.
    #[must_use]
    pub fn with_scene_dir(mut self, scene_dir: impl Into<PathBuf>) -> Self {
        self.scene_dir = scene_dir.into();
        self
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Write `value` as pretty JSON unless `path` already exists.
    fn write_once<T: Serialize>(path: PathBuf, value: &T) -> Result<Stored> {
        if path.exists() {
            return Ok(Stored::AlreadyPresent(path));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(value)?)?;
        Ok(Stored::Created(path))
    }
}

impl MetadataStore for JsonMetadataStore {
    fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::create_dir_all(&self.scene_dir)?;
        fs::create_dir_all(&self.request_dir)?;
        Ok(())
    }

    fn save_scene(&self, scene: &Scene) -> Result<Stored> {
        scene.check_granule_name()?;
        Self::write_once(self.scene_dir.join(scene.metadata_file_name()), scene)
    }

    fn save_request(&self, request: &ProcessingRequest) -> Result<Stored> {
        Self::write_once(
            self.request_dir.join(format!("{}.json", request.file_stem())),
            request,
        )
    }

    fn save_summary(&self, summary: &RunSummary) -> Result<PathBuf> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.data_dir.join(summary.file_name());
        fs::write(&path, serde_json::to_string_pretty(summary)?)?;
        Ok(path)
    }

    fn load_scenes(&self, limit: Option<usize>) -> Result<Vec<Scene>> {
        if !self.scene_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(&self.scene_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| !name.starts_with(SUMMARY_FILE_PREFIX))
            })
            .collect();
        paths.sort();

        let mut scenes = Vec::new();
        for path in paths {
            if limit.is_some_and(|limit| scenes.len() >= limit) {
                break;
            }
            let parsed = fs::read_to_string(&path)
                .map_err(crate::error::Error::from)
                .and_then(|raw| serde_json::from_str::<Scene>(&raw).map_err(Into::into));
            match parsed {
                Ok(scene) => scenes.push(scene),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable metadata record"),
            }
        }
        Ok(scenes)
    }

    fn scene_location(&self) -> &Path {
        &self.scene_dir
    }
}

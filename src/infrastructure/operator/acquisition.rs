//! Acquisition operator implementation.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::adapter::outbound::filesystem::JsonMetadataStore;
use crate::domain::Scene;
use crate::error::Result;
use crate::infrastructure::{bootstrap, config};
use crate::port::inbound::operator::acquisition::{
    AcquisitionEvents, AcquisitionOperator, DownloadReport, DownloadRequest,
};
use crate::port::{CredentialVerifier, MetadataStore};

use super::entry::Operator;

#[async_trait]
impl AcquisitionOperator for Operator {
    async fn download(
        &self,
        request: DownloadRequest,
        events: &dyn AcquisitionEvents,
    ) -> Result<DownloadReport> {
        let config = config::settings::Config::parse_toml(&request.config_toml)?;
        let session = bootstrap::build_session(&config)?;
        let auth_method = session.verify().await?;
        info!(method = %auth_method, "Earthdata credentials accepted");

        let store = Self::scene_store(&config, request.metadata_dir);
        let metadata_dir = store.scene_location().to_path_buf();
        let scenes = store.load_scenes(request.max_scenes)?;
        if scenes.is_empty() {
            warn!(dir = %metadata_dir.display(), "No scene metadata found");
            return Ok(DownloadReport {
                auth_method: Some(auth_method),
                metadata_dir,
                outcomes: Vec::new(),
            });
        }

        let download_dir = request.download_dir.unwrap_or_else(|| config.download_dir());
        let acquisition = bootstrap::build_acquisition(session, &download_dir)?;
        info!(
            scenes = scenes.len(),
            raw_dir = %acquisition.raw_dir().display(),
            safe_dir = %acquisition.safe_dir().display(),
            "Acquiring products"
        );

        let outcomes = acquisition.acquire_all(&scenes, events).await;
        let report = DownloadReport {
            auth_method: Some(auth_method),
            metadata_dir,
            outcomes,
        };
        info!(
            ready = report.ready_count(),
            total = report.outcomes.len(),
            "Acquisition finished"
        );
        Ok(report)
    }

    fn list_scenes(&self, config_toml: &str, metadata_dir: Option<PathBuf>) -> Result<Vec<Scene>> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        Self::scene_store(&config, metadata_dir).load_scenes(None)
    }
}

impl Operator {
    fn scene_store(
        config: &config::settings::Config,
        metadata_dir: Option<PathBuf>,
    ) -> JsonMetadataStore {
        let store = JsonMetadataStore::new(config.data_dir());
        match metadata_dir {
            Some(dir) => store.with_scene_dir(dir),
            None => store,
        }
    }
}


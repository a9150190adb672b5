//! Composition root: wire adapters into application services.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::asf::AsfCatalog;
use crate::adapter::outbound::copernicus::CopernicusPlanner;
use crate::adapter::outbound::earthdata::{EarthdataCredentials, EarthdataSession, EarthdataTransfer};
use crate::adapter::outbound::filesystem::{JsonMetadataStore, SafeArchive};
use crate::application::acquisition::ProductAcquisition;
use crate::application::pipeline::RetrievalPipeline;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{MetadataStore, ProcessingPlanner, SceneCatalog};

/// Build the retrieval pipeline from configuration.
pub fn build_pipeline(config: &Config) -> Result<RetrievalPipeline> {
    let area = config.area()?;
    let catalog: Arc<dyn SceneCatalog> = Arc::new(AsfCatalog::new(&config.asf.search_url)?);
    let planner: Arc<dyn ProcessingPlanner> =
        Arc::new(CopernicusPlanner::new(config.sentinel_hub.settings()));
    let store: Arc<dyn MetadataStore> = Arc::new(JsonMetadataStore::new(config.data_dir()));

    info!(
        area = %area.name(),
        catalog = catalog.name(),
        planner = planner.name(),
        planner_configured = planner.is_configured(),
        "Pipeline assembled"
    );

    Ok(RetrievalPipeline::new(
        area,
        config.pipeline_settings(),
        catalog,
        planner,
        store,
    ))
}

/// Build an authenticated Earthdata session from environment credentials.
pub fn build_session(config: &Config) -> Result<Arc<EarthdataSession>> {
    let credentials = EarthdataCredentials::from_env()?;
    let session = EarthdataSession::new(credentials, config.earthdata.login_settings())?;
    Ok(Arc::new(session))
}

/// Build the acquisition service over an authenticated session.
pub fn build_acquisition(
    session: Arc<EarthdataSession>,
    download_dir: &Path,
) -> Result<ProductAcquisition> {
    ProductAcquisition::new(
        download_dir,
        Arc::new(EarthdataTransfer::new(session)),
        Arc::new(SafeArchive::new()),
    )
}

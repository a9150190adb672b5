//! In-memory port implementations for pipeline and acquisition tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use sarwatch::domain::{ProcessingRequest, RunSummary, Scene};
use sarwatch::error::{Error, Result};
use sarwatch::port::{
    MetadataStore, PlanQuery, ProcessingPlanner, ProductTransfer, ProgressFn, SceneCatalog,
    SearchQuery, Stored, TransferProgress,
};

/// Catalog returning a fixed scene list, or failing every search.
#[derive(Default)]
pub struct StaticCatalog {
    scenes: Vec<Scene>,
    fail: bool,
    queries: Mutex<Vec<SearchQuery>>,
}

impl StaticCatalog {
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self {
            scenes,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl SceneCatalog for StaticCatalog {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Scene>> {
        self.queries.lock().push(query.clone());
        if self.fail {
            return Err(Error::Connection("catalog unavailable".into()));
        }
        Ok(self.scenes.clone())
    }

    async fn lookup_granules(&self, granules: &[String]) -> Result<Vec<Scene>> {
        Ok(self
            .scenes
            .iter()
            .filter(|scene| granules.contains(&scene.granule_name))
            .cloned()
            .collect())
    }
}

/// Planner returning fixed requests when configured.
#[derive(Default)]
pub struct StaticPlanner {
    configured: bool,
    requests: Vec<ProcessingRequest>,
    calls: AtomicUsize,
}

impl StaticPlanner {
    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn with_requests(requests: Vec<ProcessingRequest>) -> Self {
        Self {
            configured: true,
            requests,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProcessingPlanner for StaticPlanner {
    fn name(&self) -> &'static str {
        "static"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn plan(&self, _query: &PlanQuery) -> Result<Vec<ProcessingRequest>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.requests.clone())
    }

    async fn verify_access(&self) -> Result<()> {
        Ok(())
    }
}

pub fn request(time_range: &str, search_ready: bool) -> ProcessingRequest {
    ProcessingRequest {
        source: "sentinel_hub_cdse".into(),
        bbox: [-74.0, 40.7, -73.9, 40.8],
        time_range: time_range.into(),
        collection: "SENTINEL1_IW".into(),
        evalscript: "//VERSION=3".into(),
        width: 842,
        height: 1112,
        search_ready,
        note: "test".into(),
    }
}

/// Store whose `prepare` always fails. Counts attempts.
#[derive(Default)]
pub struct BrokenStore {
    prepares: AtomicUsize,
}

impl BrokenStore {
    pub fn prepares(&self) -> usize {
        self.prepares.load(Ordering::SeqCst)
    }
}

impl MetadataStore for BrokenStore {
    fn prepare(&self) -> Result<()> {
        self.prepares.fetch_add(1, Ordering::SeqCst);
        Err(Error::Io(std::io::Error::other("disk unavailable")))
    }

    fn save_scene(&self, _scene: &Scene) -> Result<Stored> {
        unreachable!("prepare always fails")
    }

    fn save_request(&self, _request: &ProcessingRequest) -> Result<Stored> {
        unreachable!("prepare always fails")
    }

    fn save_summary(&self, _summary: &RunSummary) -> Result<PathBuf> {
        unreachable!("prepare always fails")
    }

    fn load_scenes(&self, _limit: Option<usize>) -> Result<Vec<Scene>> {
        Ok(Vec::new())
    }

    fn scene_location(&self) -> &Path {
        Path::new("")
    }
}

/// Transfer that writes canned bytes in two progress steps.
pub struct CannedTransfer {
    body: Vec<u8>,
    fail_urls: Vec<String>,
    fetched: Mutex<Vec<String>>,
}

impl CannedTransfer {
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            fail_urls: Vec::new(),
            fetched: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn failing_for(mut self, url: &str) -> Self {
        self.fail_urls.push(url.to_string());
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().clone()
    }
}

#[async_trait]
impl ProductTransfer for CannedTransfer {
    async fn fetch(&self, url: &str, destination: &Path, progress: ProgressFn<'_>) -> Result<u64> {
        self.fetched.lock().push(url.to_string());
        if self.fail_urls.iter().any(|fail| fail == url) {
            return Err(Error::Connection(format!("{url} unreachable")));
        }
        let total = Some(self.body.len() as u64);
        let half = self.body.len() / 2;
        progress(TransferProgress {
            downloaded: half as u64,
            total,
        });
        fs::write(destination, &self.body)?;
        progress(TransferProgress {
            downloaded: self.body.len() as u64,
            total,
        });
        Ok(self.body.len() as u64)
    }
}

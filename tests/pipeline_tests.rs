mod support;

use std::fs;
use std::sync::Arc;

use sarwatch::adapter::outbound::filesystem::JsonMetadataStore;
use sarwatch::application::pipeline::{PipelineSettings, RetrievalPipeline};
use sarwatch::domain::error::DomainError;
use sarwatch::domain::{RunSummary, Scene};
use sarwatch::error::Error;
use sarwatch::port::MetadataStore;
use support::config::harbor_area;
use support::fakes::{request, StaticCatalog, StaticPlanner};
use support::scene::{at, scene_on};
use tempfile::TempDir;

fn pipeline(
    dir: &TempDir,
    catalog: Arc<StaticCatalog>,
    planner: Arc<StaticPlanner>,
) -> RetrievalPipeline {
    RetrievalPipeline::new(
        harbor_area(),
        PipelineSettings::default(),
        catalog,
        planner,
        Arc::new(JsonMetadataStore::new(dir.path())),
    )
}

fn july_scenes() -> Vec<Scene> {
    vec![
        scene_on("S1A_JULY_10", 2025, 7, 10),
        scene_on("S1A_JULY_20", 2025, 7, 20),
        scene_on("S1A_JULY_13", 2025, 7, 13),
    ]
}

#[tokio::test]
async fn run_selects_newest_and_baseline_and_persists_both() {
    let dir = TempDir::new().unwrap();
    let catalog = Arc::new(StaticCatalog::new(july_scenes()));
    let pipeline = pipeline(&dir, Arc::clone(&catalog), Arc::new(StaticPlanner::unconfigured()));

    let now = at(2025, 7, 21, 0);
    let summary = pipeline.run_at(now, Some(7)).await.unwrap();

    assert_eq!(summary.asf_results.found, 3);
    assert_eq!(summary.asf_results.selected, 2);
    assert_eq!(summary.asf_results.downloaded, 2);
    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.selected_scenes, vec!["S1A_JULY_20", "S1A_JULY_13"]);
    assert_eq!(summary.target_days_back, 7);
    assert_eq!(summary.time_range.start, at(2025, 7, 14, 0));
    assert_eq!(summary.time_range.end, now);

    assert!(dir.path().join("asf/S1A_JULY_20.json").is_file());
    assert!(dir.path().join("asf/S1A_JULY_13.json").is_file());
    assert!(!dir.path().join("asf/S1A_JULY_10.json").exists());

    let queries = catalog.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].max_results, 100);
    assert!(queries[0].area_wkt.starts_with("POLYGON(("));
}

#[tokio::test]
async fn run_writes_summary_named_after_execution_time() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(
        &dir,
        Arc::new(StaticCatalog::new(july_scenes())),
        Arc::new(StaticPlanner::unconfigured()),
    );

    let summary = pipeline.run_at(at(2025, 7, 21, 9), None).await.unwrap();

    let path = dir.path().join("pipeline_summary_20250721_090000.json");
    let stored: RunSummary = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(stored, summary);
}

#[tokio::test]
async fn second_run_does_not_rewrite_existing_records() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(
        &dir,
        Arc::new(StaticCatalog::new(july_scenes())),
        Arc::new(StaticPlanner::unconfigured()),
    );

    let first = pipeline.run_at(at(2025, 7, 21, 0), Some(7)).await.unwrap();

    let record = dir.path().join("asf/S1A_JULY_20.json");
    let mut edited: Scene = serde_json::from_str(&fs::read_to_string(&record).unwrap()).unwrap();
    edited.beam_mode = "EDITED".into();
    fs::write(&record, serde_json::to_string(&edited).unwrap()).unwrap();

    let second = pipeline.run_at(at(2025, 7, 21, 1), Some(7)).await.unwrap();

    assert_eq!(first.asf_results.downloaded, 2);
    // Existing records count as stored.
    assert_eq!(second.asf_results.downloaded, 2);
    assert_eq!(second.asf_results.selected, 2);
    assert_ne!(first.run_id, second.run_id);

    let kept: Scene = serde_json::from_str(&fs::read_to_string(&record).unwrap()).unwrap();
    assert_eq!(kept.beam_mode, "EDITED");
}

#[tokio::test]
async fn single_scene_is_both_newest_and_closest() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(
        &dir,
        Arc::new(StaticCatalog::new(vec![scene_on("S1A_ONLY", 2025, 7, 18)])),
        Arc::new(StaticPlanner::unconfigured()),
    );

    let summary = pipeline.run_at(at(2025, 7, 21, 0), Some(7)).await.unwrap();
    assert_eq!(summary.selected_scenes, vec!["S1A_ONLY"]);
    assert_eq!(summary.asf_results.selected, 1);
}

#[tokio::test]
async fn catalog_failure_yields_empty_summary() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(
        &dir,
        Arc::new(StaticCatalog::failing()),
        Arc::new(StaticPlanner::unconfigured()),
    );

    let summary = pipeline.run_at(at(2025, 7, 21, 0), Some(3)).await.unwrap();
    assert_eq!(summary.asf_results.found, 0);
    assert_eq!(summary.total_files, 0);
    assert!(summary.selected_scenes.is_empty());
}

#[tokio::test]
async fn undated_scenes_are_found_but_not_selected() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(
        &dir,
        Arc::new(StaticCatalog::new(vec![Scene::new("S1A_UNDATED", "unknown")])),
        Arc::new(StaticPlanner::unconfigured()),
    );

    let summary = pipeline.run_at(at(2025, 7, 21, 0), Some(7)).await.unwrap();
    assert_eq!(summary.asf_results.found, 1);
    assert_eq!(summary.asf_results.selected, 0);
}

#[tokio::test]
async fn only_search_ready_requests_are_persisted() {
    let dir = TempDir::new().unwrap();
    let planner = Arc::new(StaticPlanner::with_requests(vec![
        request("2025-07-14T00:00:00/2025-07-21T00:00:00", true),
        request("2025-07-07T00:00:00/2025-07-14T00:00:00", false),
    ]));
    let pipeline = pipeline(&dir, Arc::new(StaticCatalog::default()), Arc::clone(&planner));

    let summary = pipeline.run_at(at(2025, 7, 21, 0), Some(7)).await.unwrap();

    assert_eq!(planner.calls(), 1);
    assert_eq!(summary.sentinel_hub_results.found, 2);
    assert_eq!(summary.sentinel_hub_results.processed, 1);
    assert_eq!(summary.total_files, 1);
    assert!(dir
        .path()
        .join("sentinel_hub/sentinel_hub_2025-07-14T00-00-00_to_2025-07-21T00-00-00.json")
        .is_file());
}

#[tokio::test]
async fn unconfigured_planner_is_not_called() {
    let dir = TempDir::new().unwrap();
    let planner = Arc::new(StaticPlanner::unconfigured());
    let pipeline = pipeline(&dir, Arc::new(StaticCatalog::default()), Arc::clone(&planner));

    let summary = pipeline.run_at(at(2025, 7, 21, 0), None).await.unwrap();
    assert_eq!(planner.calls(), 0);
    assert_eq!(summary.sentinel_hub_results.found, 0);
}

#[tokio::test]
async fn zero_days_back_is_rejected_before_searching() {
    let dir = TempDir::new().unwrap();
    let catalog = Arc::new(StaticCatalog::new(july_scenes()));
    let pipeline = pipeline(&dir, Arc::clone(&catalog), Arc::new(StaticPlanner::unconfigured()));

    let result = pipeline.run_at(at(2025, 7, 21, 0), Some(0)).await;
    assert!(matches!(result, Err(Error::Domain(DomainError::ZeroDaysBack))));
    assert!(catalog.queries().is_empty());
}

#[tokio::test]
async fn persisted_scenes_load_back_for_download() {
    let dir = TempDir::new().unwrap();
    let pipeline = pipeline(
        &dir,
        Arc::new(StaticCatalog::new(july_scenes())),
        Arc::new(StaticPlanner::unconfigured()),
    );
    pipeline.run_at(at(2025, 7, 21, 0), Some(7)).await.unwrap();

    let store = JsonMetadataStore::new(dir.path());
    let names: Vec<String> = store
        .load_scenes(None)
        .unwrap()
        .into_iter()
        .map(|scene| scene.granule_name)
        .collect();
    assert_eq!(names, vec!["S1A_JULY_13", "S1A_JULY_20"]);
    assert_eq!(store.load_scenes(Some(1)).unwrap().len(), 1);
}

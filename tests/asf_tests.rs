mod support;

use sarwatch::adapter::outbound::asf::AsfCatalog;
use sarwatch::error::Error;
use sarwatch::port::{SceneCatalog, SearchQuery};
use serde_json::json;
use support::scene::at;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/services/search/param";

fn collection() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": null,
                "properties": {
                    "sceneName": "S1A_IW_SLC__1SDV_20250714T154854_20250714T154920_060082_077700_D5A5",
                    "startTime": "2025-07-14T15:48:54Z",
                    "beamModeType": "IW",
                    "url": "https://datapool.asf.alaska.edu/SLC/SA/S1A.zip",
                    "bytes": 4_404_019_200u64,
                    "flightDirection": "ASCENDING"
                }
            },
            {
                "type": "Feature",
                "properties": { "startTime": "2025-07-15T15:48:54Z" }
            }
        ]
    })
}

fn catalog(server: &MockServer) -> AsfCatalog {
    AsfCatalog::new(format!("{}{SEARCH_PATH}", server.uri())).unwrap()
}

#[tokio::test]
async fn search_sends_slc_query_and_parses_features() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("platform", "SENTINEL-1"))
        .and(query_param("processingLevel", "SLC"))
        .and(query_param("start", "2025-07-14T00:00:00Z"))
        .and(query_param("end", "2025-07-21T00:00:00Z"))
        .and(query_param("maxResults", "50"))
        .and(query_param("output", "geojson"))
        .and(query_param("intersectsWith", "POLYGON((0 0, 1 0, 1 1, 0 0))"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection()))
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchQuery {
        area_wkt: "POLYGON((0 0, 1 0, 1 1, 0 0))".into(),
        start: at(2025, 7, 14, 0),
        end: at(2025, 7, 21, 0),
        max_results: 50,
    };
    let scenes = catalog(&server).search(&query).await.unwrap();

    assert_eq!(scenes.len(), 1, "features without a granule name are dropped");
    let scene = &scenes[0];
    assert_eq!(scene.beam_mode, "IW");
    assert_eq!(scene.orbit_direction, "ASCENDING");
    assert_eq!(scene.frame, "unknown");
    assert!((scene.size_mb - 4200.0).abs() < 1e-6);
    assert_eq!(scene.acquired_at(), Some(chrono::NaiveDateTime::parse_from_str("2025-07-14T15:48:54", "%Y-%m-%dT%H:%M:%S").unwrap()));
}

#[tokio::test]
async fn lookup_sends_granule_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("granule_list", "A,B"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "features": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let scenes = catalog(&server)
        .lookup_granules(&["A".to_string(), "B".to_string()])
        .await
        .unwrap();
    assert!(scenes.is_empty());
}

#[tokio::test]
async fn server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = catalog(&server).lookup_granules(&["A".to_string()]).await;
    match result {
        Err(Error::Connection(message)) => assert!(message.contains("503")),
        other => panic!("expected connection error, got {other:?}"),
    }
}

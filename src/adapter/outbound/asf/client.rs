//! ASF search API client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::dto::FeatureCollection;
use crate::domain::Scene;
use crate::error::{Error, Result};
use crate::port::{SceneCatalog, SearchQuery};

/// Public ASF search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://api.daac.asf.alaska.edu/services/search/param";

const PLATFORM: &str = "SENTINEL-1";
const PROCESSING_LEVEL: &str = "SLC";
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Scene catalog backed by the ASF search API.
#[derive(Debug, Clone)]
pub struct AsfCatalog {
    client: Client,
    search_url: String,
}

impl AsfCatalog {
    /// Create a catalog with a default HTTP client.
    pub fn new(search_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sarwatch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, search_url))
    }

    #[must_use]
    pub fn with_client(client: Client, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }

    #[must_use]
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    async fn query(&self, params: &[(&str, String)]) -> Result<Vec<Scene>> {
        debug!(url = %self.search_url, ?params, "ASF search request");
        let response = self
            .client
            .get(&self.search_url)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Connection(format!(
                "ASF search returned HTTP {}",
                status.as_u16()
            )));
        }

        let collection: FeatureCollection = response.json().await?;
        Ok(collection.into_scenes())
    }
}

#[async_trait]
impl SceneCatalog for AsfCatalog {
    fn name(&self) -> &'static str {
        "asf"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Scene>> {
        info!(
            start = %query.start,
            end = %query.end,
            max_results = query.max_results,
            "Searching ASF"
        );
        let params = [
            ("platform", PLATFORM.to_string()),
            ("processingLevel", PROCESSING_LEVEL.to_string()),
            ("start", query.start.format(TIME_FORMAT).to_string()),
            ("end", query.end.format(TIME_FORMAT).to_string()),
            ("intersectsWith", query.area_wkt.clone()),
            ("maxResults", query.max_results.to_string()),
            ("output", "geojson".to_string()),
        ];
        self.query(&params).await
    }

    async fn lookup_granules(&self, granules: &[String]) -> Result<Vec<Scene>> {
        let params = [
            ("granule_list", granules.join(",")),
            ("output", "geojson".to_string()),
        ];
        self.query(&params).await
    }
}

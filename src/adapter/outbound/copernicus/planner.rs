//! Sentinel Hub processing request planner.
//!
//! Requests are prepared and persisted, not submitted. Credentials are only
//! exercised by [`ProcessingPlanner::verify_access`].

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::domain::ProcessingRequest;
use crate::error::{AuthError, ConfigError, Error, Result};
use crate::port::{PlanQuery, ProcessingPlanner};

pub const DEFAULT_BASE_URL: &str = "https://sh.dataspace.copernicus.eu";
pub const DEFAULT_TOKEN_URL: &str =
    "https://identity.dataspace.copernicus.eu/auth/realms/CDSE/protocol/openid-connect/token";

pub const SOURCE: &str = "sentinel_hub_cdse";
pub const COLLECTION: &str = "SENTINEL1_IW";

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Dual-polarization backscatter as 32-bit floats.
const EVALSCRIPT: &str = r#"//VERSION=3
function setup() {
    return {
        input: ["VV", "VH"],
        output: {
            id: "default",
            bands: 2,
            sampleType: "FLOAT32"
        }
    };
}

function evaluatePixel(sample) {
    return [sample.VV, sample.VH];
}
"#;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct SentinelHubSettings {
    pub client_id: String,
    pub client_secret: String,
    pub instance_id: Option<String>,
    pub base_url: String,
    pub token_url: String,
}

impl fmt::Debug for SentinelHubSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentinelHubSettings")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("instance_id", &self.instance_id)
            .field("base_url", &self.base_url)
            .field("token_url", &self.token_url)
            .finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

pub struct CopernicusPlanner {
    client: Client,
    settings: SentinelHubSettings,
}

impl CopernicusPlanner {
    #[must_use]
    pub fn new(settings: SentinelHubSettings) -> Self {
        Self::with_client(Client::new(), settings)
    }

    #[must_use]
    pub const fn with_client(client: Client, settings: SentinelHubSettings) -> Self {
        Self { client, settings }
    }

    fn note(&self) -> String {
        match &self.settings.instance_id {
            Some(instance) => format!("Using Sentinel Hub instance {instance}"),
            None => "Using Copernicus Data Space Ecosystem".to_string(),
        }
    }
}

#[async_trait]
impl ProcessingPlanner for CopernicusPlanner {
    fn name(&self) -> &'static str {
        "sentinel_hub"
    }

    fn is_configured(&self) -> bool {
        !self.settings.client_id.trim().is_empty()
    }

    async fn plan(&self, query: &PlanQuery) -> Result<Vec<ProcessingRequest>> {
        if !self.is_configured() {
            return Ok(Vec::new());
        }
        if query.resolution <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "processing.resolution",
                reason: "must be positive".to_string(),
            }
            .into());
        }

        let (width, height) = query.bbox.dimensions(query.resolution);
        let time_range = format!(
            "{}/{}",
            query.start.format(TIME_FORMAT),
            query.end.format(TIME_FORMAT)
        );
        info!(%time_range, width, height, "Prepared Sentinel Hub request");

        Ok(vec![ProcessingRequest {
            source: SOURCE.to_string(),
            bbox: query.bbox.to_array(),
            time_range,
            collection: COLLECTION.to_string(),
            evalscript: EVALSCRIPT.to_string(),
            width,
            height,
            search_ready: true,
            note: self.note(),
        }])
    }

    async fn verify_access(&self) -> Result<()> {
        if !self.is_configured() {
            return Err(ConfigError::MissingField {
                field: "sentinel_hub.client_id",
            }
            .into());
        }

        let response = self
            .client
            .post(&self.settings.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.settings.client_id.as_str()),
                ("client_secret", self.settings.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Rejected {
                host: response.url().host_str().unwrap_or_default().to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let token: TokenResponse = response.json().await?;
        match token.access_token {
            Some(token) if !token.is_empty() => Ok(()),
            _ => Err(Error::Connection(
                "token endpoint returned no access_token".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoundingBox;
    use chrono::NaiveDate;

    fn settings(client_id: &str) -> SentinelHubSettings {
        SentinelHubSettings {
            client_id: client_id.to_string(),
            client_secret: "secret".to_string(),
            instance_id: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }

    fn query() -> PlanQuery {
        let day = NaiveDate::from_ymd_opt(2025, 7, 20).unwrap();
        PlanQuery {
            bbox: BoundingBox {
                min_lon: 34.2,
                min_lat: 31.2,
                max_lon: 34.6,
                max_lat: 31.6,
            },
            start: day.and_hms_opt(0, 0, 0).unwrap() - chrono::Duration::days(7),
            end: day.and_hms_opt(0, 0, 0).unwrap(),
            resolution: 10.0,
        }
    }

    #[tokio::test]
    async fn unconfigured_planner_plans_nothing() {
        let planner = CopernicusPlanner::new(settings(""));
        assert!(!planner.is_configured());
        assert!(planner.plan(&query()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn configured_planner_prepares_one_request() {
        let planner = CopernicusPlanner::new(settings("client"));
        let requests = planner.plan(&query()).await.unwrap();

        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.source, SOURCE);
        assert_eq!(request.collection, COLLECTION);
        assert_eq!(request.time_range, "2025-07-13T00:00:00Z/2025-07-20T00:00:00Z");
        assert_eq!(request.bbox, [34.2, 31.2, 34.6, 31.6]);
        assert!(request.search_ready);
        assert!(request.evalscript.contains("sample.VH"));
        assert!(request.width > 1 && request.height > 1);
        assert_eq!(request.note, "Using Copernicus Data Space Ecosystem");
    }

    #[test]
    fn debug_hides_secret() {
        assert!(!format!("{:?}", settings("client")).contains("secret\""));
    }
}

//! GeoJSON payloads returned by the ASF search API.
//!
//! Property names vary between product types and API versions, so each
//! scene field is read from an ordered list of candidate keys.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::scene::is_plain_file_name;
use crate::domain::Scene;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

const GRANULE_KEYS: &[&str] = &["sceneName", "fileName", "granuleName", "productName"];
const DATE_KEYS: &[&str] = &["startTime", "acquisitionDate", "sensingTime"];

#[derive(Debug, Deserialize)]
pub(super) struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Feature {
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl FeatureCollection {
    pub fn into_scenes(self) -> Vec<Scene> {
        self.features
            .into_iter()
            .filter_map(Feature::into_scene)
            .collect()
    }
}

impl Feature {
    /// Convert to a scene. Features without a usable granule name are dropped.
    pub fn into_scene(self) -> Option<Scene> {
        let props = &self.properties;
        let Some(granule) = first_text(props, GRANULE_KEYS) else {
            warn!(
                keys = ?props.keys().collect::<Vec<_>>(),
                "Search result has no granule name, skipping"
            );
            return None;
        };
        if !is_plain_file_name(&granule) {
            warn!(granule = %granule, "Granule name is not a plain file name, skipping");
            return None;
        }

        let mut scene = Scene::new(granule, first_text(props, DATE_KEYS).unwrap_or_default());
        if let Some(platform) = text(props, "platform") {
            scene.platform = platform;
        }
        if let Some(beam_mode) = text(props, "beamModeType") {
            scene.beam_mode = beam_mode;
        }
        if let Some(url) = text(props, "url") {
            scene.url = url;
        }
        if let Some(path) = text(props, "pathNumber") {
            scene.path = path;
        }
        if let Some(frame) = text(props, "frameNumber") {
            scene.frame = frame;
        }
        if let Some(direction) = text(props, "flightDirection") {
            scene.orbit_direction = direction;
        }
        if let Some(polarization) = text(props, "polarization") {
            scene.polarization = polarization;
        }
        scene.size_mb = props
            .get("bytes")
            .and_then(number)
            .map_or(0.0, |bytes| bytes / BYTES_PER_MB);
        scene.s3_urls = props
            .get("s3Urls")
            .and_then(Value::as_array)
            .map(|urls| {
                urls.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(scene)
    }
}

fn first_text(props: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| text(props, key))
}

/// Non-empty string or number property rendered as text.
fn text(props: &Map<String, Value>, key: &str) -> Option<String> {
    match props.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

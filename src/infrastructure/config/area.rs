//! Area of interest section.

use serde::Deserialize;

use crate::domain::{AreaOfInterest, Coordinate};
use crate::error::{ConfigError, Result};

/// `[area_of_interest]`: a named polygon ring in `[lon, lat]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub coordinates: Vec<Coordinate>,
}

fn default_name() -> String {
    "target_area".to_string()
}

impl AreaConfig {
    /// Validate into the domain type.
    pub fn to_domain(&self) -> Result<AreaOfInterest> {
        AreaOfInterest::try_new(self.name.clone(), self.coordinates.clone()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "area_of_interest.coordinates",
                reason: e.to_string(),
            }
            .into()
        })
    }
}

//! Copernicus Data Space Ecosystem (Sentinel Hub) request planner.

mod planner;

pub use planner::{
    CopernicusPlanner, SentinelHubSettings, COLLECTION, DEFAULT_BASE_URL, DEFAULT_TOKEN_URL,
    SOURCE,
};

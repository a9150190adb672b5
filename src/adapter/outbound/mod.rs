//! Outbound adapters (driven side).

pub mod asf;
pub mod copernicus;
pub mod earthdata;
pub mod filesystem;

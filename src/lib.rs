//! sarwatch - Sentinel-1 SAR scene retrieval for topographic change detection.
//!
//! Searches the ASF catalog for Sentinel-1 SLC scenes over an area of
//! interest, selects a scene pair for change detection, prepares Sentinel Hub
//! processing requests, and downloads and verifies SAFE products.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Areas, scenes, scene-pair selection, SAFE products
//! - **`port`** - Traits the application depends on (catalog, planner, store,
//!   transfer, archive) and the operator surface consumed by the CLI
//! - **`application`** - Retrieval pipeline, scheduler and product acquisition
//! - **`adapter`** - ASF search, Earthdata Login, Copernicus Sentinel Hub,
//!   JSON metadata files and SAFE archives; the CLI
//! - **`infrastructure`** - Configuration, logging and runtime wiring
//!
//! # Example
//!
//! ```no_run
//! use sarwatch::infrastructure::bootstrap;
//! use sarwatch::infrastructure::config::settings::Config;
//!
//! # async fn example() -> sarwatch::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let pipeline = bootstrap::build_pipeline(&config)?;
//! let summary = pipeline.run(None).await?;
//! println!("{} scenes selected", summary.selected_scenes.len());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!        CLI ───────▶│  inbound::operator      │
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     │                         │                             │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Catalog │            │   Store     │              │ Transfer  │
//! │ Adapter │            │   Adapter   │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`SceneCatalog`] - Sentinel-1 scene search (ASF)
//! - [`ProcessingPlanner`] - Raster processing requests (Sentinel Hub)
//! - [`MetadataStore`] - Persistence for scene records and run summaries
//! - [`ProductTransfer`] - Authenticated product download
//! - [`ProductArchive`] - SAFE extraction and verification
//! - [`AcquisitionEvents`] - Per-scene acquisition progress
//! - [`CredentialVerifier`] - Archive credential checks

pub mod inbound;
pub mod outbound;

pub use outbound::archive::ProductArchive;
pub use outbound::auth::{AuthMethod, CredentialVerifier};
pub use outbound::catalog::{SceneCatalog, SearchQuery};
pub use outbound::events::{AcquisitionEvents, SilentEvents};
pub use outbound::planner::{PlanQuery, ProcessingPlanner};
pub use outbound::store::{MetadataStore, Stored};
pub use outbound::transfer::{ProductTransfer, ProgressFn, TransferProgress};

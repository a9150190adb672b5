//! Source-agnostic domain types: areas, scenes, scene pairs, SAFE products.

pub mod area;
pub mod error;
pub mod product;
pub mod request;
pub mod scene;
pub mod selection;
pub mod summary;

pub use area::{AreaOfInterest, BoundingBox, Coordinate};
pub use product::{MeasurementFile, ProductSource, SafeProduct, SceneOutcome, SceneStatus};
pub use request::ProcessingRequest;
pub use scene::{Polarization, Scene};
pub use selection::{select_scene_pair, ScenePair};
pub use summary::RunSummary;

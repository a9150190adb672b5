//! Local filesystem adapters.

mod safe;
mod store;

pub use safe::SafeArchive;
pub use store::{JsonMetadataStore, SCENE_DIR, REQUEST_DIR};

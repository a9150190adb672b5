//! Infrastructure configuration modules.

pub mod area;
pub mod logging;
pub mod pipeline;
pub mod settings;
pub mod sources;

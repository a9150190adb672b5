//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies such as scene
//! catalogs, raster services, product downloads and storage.

pub mod archive;
pub mod auth;
pub mod catalog;
pub mod events;
pub mod planner;
pub mod store;
pub mod transfer;

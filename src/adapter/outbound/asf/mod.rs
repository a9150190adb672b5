//! Alaska Satellite Facility search API.

mod client;
mod dto;

pub use client::{AsfCatalog, DEFAULT_SEARCH_URL};

//! Operator implementations for inbound adapters.

pub mod acquisition;
pub mod config;
pub mod diagnostic;
pub mod entry;
pub mod runtime;

mod shared;

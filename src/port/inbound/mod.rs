//! Inbound (driving) ports consumed by inbound adapters.
//!
//! Inbound ports expose application capabilities to external drivers such as
//! the command-line interface and the scheduled runtime.
//!
//! # Modules
//!
//! - [`operator`]: Operator-facing use cases for configuration, diagnostics,
//!   pipeline runs and product acquisition

pub mod operator;

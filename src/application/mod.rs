//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the retrieval pipeline, its scheduler and product
//! acquisition.

pub mod acquisition;
pub mod pipeline;
pub mod scheduler;

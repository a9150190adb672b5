//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors and parsers when a
//! domain invariant is violated.
//!
//! # Examples
//!
//! ```
//! use sarwatch::domain::area::{AreaOfInterest, Coordinate};
//! use sarwatch::domain::error::DomainError;
//!
//! let result = AreaOfInterest::try_new(
//!     "too-small",
//!     vec![Coordinate::new(34.27, 31.36), Coordinate::new(34.36, 31.30)],
//! );
//!
//! assert!(matches!(result, Err(DomainError::TooFewCoordinates { count: 2 })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A polygon ring needs at least three vertices.
    #[error("area of interest needs at least 3 coordinate pairs, got {count}")]
    TooFewCoordinates {
        /// Number of coordinate pairs that were provided.
        count: usize,
    },

    /// Longitude must be within [-180, 180] and latitude within [-90, 90].
    #[error("coordinate ({lon}, {lat}) is outside the valid longitude/latitude range")]
    InvalidCoordinate {
        /// Offending longitude.
        lon: f64,
        /// Offending latitude.
        lat: f64,
    },

    /// A look-back window of zero days selects nothing.
    #[error("days back must be greater than 0")]
    ZeroDaysBack,

    /// Polarization label not in VV/VH/HH/HV.
    #[error("unknown polarization: {0}")]
    UnknownPolarization(String),

    /// Granule names become file names, so they must be one plain path component.
    #[error("granule name is not a plain file name: {0:?}")]
    InvalidGranuleName(String),
}

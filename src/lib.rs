//! Locus: interned 3D coordinate value objects
//!
//! This crate models a point in 3D space in two interchangeable forms,
//! Cartesian (x, y, z) and spherical (azimuth φ, inclination θ, radius r),
//! with lossless mutual conversion, distance and central-angle metrics,
//! tolerance-based equality, and a shared-instance pool that deduplicates
//! equal values so that equal coordinates are also pointer-identical.
//!
//! All values are immutable; anything resembling mutation produces a new
//! value, which keeps shared instances safe without locking. Angles are
//! radians throughout.
//!
//! # Examples
//!
//! ```rust
//! use locus::{interning, Coordinate};
//!
//! let a = interning::cartesian(1.0, 2.0, 3.0);
//! let b = interning::cartesian(1.0, 2.0, 3.0);
//! assert!(std::sync::Arc::ptr_eq(&a, &b));
//!
//! let origin = interning::cartesian(0.0, 0.0, 0.0);
//! let d = a.cartesian_distance(origin.as_ref());
//! assert!((d - 3.741657).abs() < 1e-4);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod interning;
pub mod location;

// Re-export commonly used types
pub use coordinates::{CartesianCoordinate, Coordinate, CoordinateError, SphericCoordinate};
pub use interning::CoordinatePool;
pub use location::Location;

/// Main error type for the locus library
#[derive(Debug, Error)]
pub enum LocusError {
    #[error("Coordinate error: {0}")]
    Coordinate(#[from] CoordinateError),
}

/// Result type for locus operations
pub type Result<T> = std::result::Result<T, LocusError>;

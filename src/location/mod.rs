//! Named locations wrapping an interned coordinate
//!
//! The thin collaborator-facing layer above the coordinate model: a
//! location ties a display name to a point in space. Coordinates come out
//! of the shared pool, so two locations at the same point share one
//! coordinate instance.

use std::sync::Arc;

use crate::coordinates::{CartesianCoordinate, Coordinate};
use crate::interning;

/// A named point in 3D space
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    coordinate: Arc<CartesianCoordinate>,
}

impl Location {
    /// Creates a location from a name and raw Cartesian components
    pub fn new(name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Location {
            name: name.into(),
            coordinate: interning::cartesian(x, y, z),
        }
    }

    /// Creates a location around an existing interned coordinate
    pub fn from_coordinate(name: impl Into<String>, coordinate: Arc<CartesianCoordinate>) -> Self {
        Location {
            name: name.into(),
            coordinate,
        }
    }

    /// The display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The interned coordinate of this location
    pub fn coordinate(&self) -> &Arc<CartesianCoordinate> {
        &self.coordinate
    }

    /// Whether both locations denote the same point, within tolerance
    ///
    /// Names are labels, not identity; only the coordinates are compared.
    pub fn is_equal(&self, other: &Location) -> bool {
        Arc::ptr_eq(&self.coordinate, &other.coordinate)
            || self.coordinate.is_equal(other.coordinate.as_ref())
    }

    /// Euclidean distance to another location
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.coordinate.cartesian_distance(other.coordinate.as_ref())
    }

    /// Central angle to another location, in radians
    pub fn angle_to(&self, other: &Location) -> f64 {
        self.coordinate.central_angle(other.coordinate.as_ref())
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

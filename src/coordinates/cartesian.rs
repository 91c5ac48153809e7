//! # Cartesian Coordinate Representation
//!
//! This module provides the rectangular (x, y, z) representation of a point
//! in 3D space. Cartesian form is the canonical representation of the
//! subsystem: the persistence collaborator stores exactly these three
//! columns, and cross-representation equality is decided here.
//!
//! ## Design Philosophy
//!
//! The `CartesianCoordinate` struct stores coordinates in a standard
//! right-handed Cartesian coordinate system, providing exact representation
//! of 3D positions without the singularities that arise in spherical form
//! (every spherical triple with radius zero, or inclination 0 or π,
//! collapses to a single physical point).
//!
//! ## Internal Storage
//!
//! Components are stored as three `f64` values:
//! - Values maintain full IEEE 754 double precision
//! - No normalization is applied at construction
//! - The value is immutable; "changing" a component yields a new value
//!
//! ## Examples
//!
//! ```rust
//! use locus::coordinates::{CartesianCoordinate, Coordinate};
//!
//! let origin = CartesianCoordinate::new(0.0, 0.0, 0.0);
//! let p = CartesianCoordinate::new(1.0, 2.0, 3.0);
//!
//! // Euclidean distance sqrt(1 + 4 + 9)
//! let d = origin.cartesian_distance(&p);
//! assert!((d - 14.0_f64.sqrt()).abs() < 1e-12);
//! ```

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::spheric::SphericCoordinate;
use super::Coordinate;
use crate::constants::EPSILON;

/// Three-dimensional Cartesian coordinate value
///
/// Represents a point in 3D space using rectangular offsets from the
/// origin. Instances are immutable: all "mutating" operations return new
/// values, so a shared (interned) instance can never change underneath its
/// holders.
///
/// # Storage Strategy
///
/// - Each component stored as `f64` for maximum precision
/// - No internal transformations or normalization
/// - `Copy` semantics; the interning pool hands out `Arc` handles when
///   reference identity matters
///
/// # Equality
///
/// `PartialEq` is tolerance-based: two values are equal when every
/// component differs by at most [`EPSILON`]. For that reason the type
/// deliberately does not implement `Hash`; the interning pool keys on
/// exact bit patterns internally instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CartesianCoordinate {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl CartesianCoordinate {
    /// Creates a new Cartesian coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locus::coordinates::CartesianCoordinate;
    ///
    /// let coord = CartesianCoordinate::new(1.0, 2.0, 3.0);
    /// assert_eq!(coord.x, 1.0);
    /// assert_eq!(coord.y, 2.0);
    /// assert_eq!(coord.z, 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        CartesianCoordinate { x, y, z }
    }

    /// Returns a copy with the x component replaced
    pub fn with_x(&self, x: f64) -> Self {
        CartesianCoordinate { x, ..*self }
    }

    /// Returns a copy with the y component replaced
    pub fn with_y(&self, y: f64) -> Self {
        CartesianCoordinate { y, ..*self }
    }

    /// Returns a copy with the z component replaced
    pub fn with_z(&self, z: f64) -> Self {
        CartesianCoordinate { z, ..*self }
    }

    /// Calculates the magnitude (distance from the origin)
    ///
    /// # Mathematical Formula
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locus::coordinates::CartesianCoordinate;
    ///
    /// let coord = CartesianCoordinate::new(3.0, 4.0, 0.0);
    /// assert_eq!(coord.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locus::coordinates::CartesianCoordinate;
    /// use nalgebra::Vector3;
    ///
    /// let coord = CartesianCoordinate::new(1.0, 2.0, 3.0);
    /// let vec: Vector3<f64> = coord.to_vector3();
    /// assert_eq!(vec.x, 1.0);
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        CartesianCoordinate {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl Coordinate for CartesianCoordinate {
    /// Identity conversion; no allocation, no recomputation
    fn as_cartesian(&self) -> CartesianCoordinate {
        *self
    }

    /// Converts to spherical form
    ///
    /// Uses `r = sqrt(x²+y²+z²)`, `θ = acos(z/r)`, `φ = atan2(y, x)`. The
    /// two-argument arctangent preserves the quadrant for x ≤ 0. The
    /// acos ratio is clamped against rounding past ±1.
    ///
    /// The origin (r = 0) has no well-defined angles; by policy it maps to
    /// (φ = 0, θ = 0, r = 0) rather than NaN.
    fn as_spheric(&self) -> SphericCoordinate {
        let r = self.magnitude();
        if r == 0.0 {
            return SphericCoordinate::origin();
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        SphericCoordinate::from_parts(phi, theta, r)
    }

    /// Tolerance equality on the three axes
    ///
    /// `other` is converted to Cartesian form first, so mixed-representation
    /// comparisons see the same physical point.
    fn is_equal(&self, other: &dyn Coordinate) -> bool {
        let o = other.as_cartesian();
        (o.x - self.x).abs() <= EPSILON
            && (o.y - self.y).abs() <= EPSILON
            && (o.z - self.z).abs() <= EPSILON
    }
}

impl PartialEq for CartesianCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for CartesianCoordinate {
    type Output = CartesianCoordinate;

    fn add(self, other: CartesianCoordinate) -> CartesianCoordinate {
        CartesianCoordinate {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for CartesianCoordinate {
    type Output = CartesianCoordinate;

    fn sub(self, other: CartesianCoordinate) -> CartesianCoordinate {
        CartesianCoordinate {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for CartesianCoordinate {
    type Output = CartesianCoordinate;

    fn mul(self, scalar: f64) -> CartesianCoordinate {
        CartesianCoordinate {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_cartesian_creation() {
        let coord = CartesianCoordinate::new(1.0, 2.0, 3.0);
        assert_eq!(coord.x, 1.0);
        assert_eq!(coord.y, 2.0);
        assert_eq!(coord.z, 3.0);
    }

    #[test]
    fn test_magnitude_calculation() {
        let coord = CartesianCoordinate::new(3.0, 4.0, 0.0);
        assert_eq!(coord.magnitude(), 5.0);

        let zero = CartesianCoordinate::new(0.0, 0.0, 0.0);
        assert_eq!(zero.magnitude(), 0.0);
    }

    #[test]
    fn test_with_component_returns_new_value() {
        let coord = CartesianCoordinate::new(1.0, 2.0, 3.0);
        let moved = coord.with_x(-1.0);

        assert_eq!(moved.x, -1.0);
        assert_eq!(moved.y, 2.0);
        // Original untouched
        assert_eq!(coord.x, 1.0);
    }

    #[test]
    fn test_as_spheric_quadrants() {
        // atan2 must preserve the quadrant for x <= 0; the single-argument
        // arctangent folds these onto the x > 0 half-space.
        let west = CartesianCoordinate::new(-1.0, 0.0, 0.0);
        let s = west.as_spheric();
        assert!((s.phi.abs() - PI).abs() < 1e-12, "phi was {}", s.phi);
        assert!((s.theta - PI / 2.0).abs() < 1e-12);
        assert!((s.radius - 1.0).abs() < 1e-12);

        let south_west = CartesianCoordinate::new(-1.0, -1.0, 0.0);
        let s = south_west.as_spheric();
        assert!((s.phi + 3.0 * PI / 4.0).abs() < 1e-12, "phi was {}", s.phi);
    }

    #[test]
    fn test_as_spheric_origin_policy() {
        let origin = CartesianCoordinate::new(0.0, 0.0, 0.0);
        let s = origin.as_spheric();
        assert_eq!(s.phi, 0.0);
        assert_eq!(s.theta, 0.0);
        assert_eq!(s.radius, 0.0);
    }

    #[test]
    fn test_as_spheric_poles() {
        let north = CartesianCoordinate::new(0.0, 0.0, 2.0);
        let s = north.as_spheric();
        assert!((s.theta - 0.0).abs() < 1e-12);
        assert!((s.radius - 2.0).abs() < 1e-12);

        let south = CartesianCoordinate::new(0.0, 0.0, -2.0);
        let s = south.as_spheric();
        assert!((s.theta - PI).abs() < 1e-12);
    }

    #[test]
    fn test_tolerance_equality() {
        let a = CartesianCoordinate::new(1.0, 2.0, 3.0);
        let nearly = CartesianCoordinate::new(1.0 + 1e-9, 2.0 - 1e-9, 3.0);
        let apart = CartesianCoordinate::new(1.0 + 1e-3, 2.0, 3.0);

        assert!(a.is_equal(&nearly));
        assert_eq!(a, nearly);
        assert!(!a.is_equal(&apart));
        assert_ne!(a, apart);
    }

    #[test]
    fn test_mixed_representation_equality() {
        let cart = CartesianCoordinate::new(1.0, 2.0, 3.0);
        let spheric = cart.as_spheric();
        assert!(cart.is_equal(&spheric));
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = CartesianCoordinate::new(1.0, 2.0, 3.0);
        let b = CartesianCoordinate::new(4.0, 5.0, 6.0);

        let sum = a + b;
        assert_eq!(sum.x, 5.0);
        assert_eq!(sum.y, 7.0);
        assert_eq!(sum.z, 9.0);

        let diff = b - a;
        assert_eq!(diff.x, 3.0);

        let scaled = a * 2.0;
        assert_eq!(scaled.z, 6.0);
    }

    #[test]
    fn test_vector3_conversions() {
        let coord = CartesianCoordinate::new(1.0, 2.0, 3.0);
        let vec = coord.to_vector3();
        assert_eq!(vec.y, 2.0);

        let back = CartesianCoordinate::from_vector3(vec);
        assert_eq!(coord, back);
    }
}

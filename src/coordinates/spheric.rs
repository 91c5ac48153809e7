//! Spherical coordinate representation (azimuth, inclination, radius)
//!
//! Angles are radians throughout. The constructor validates the radius and
//! reduces both angles into `(-2π, 2π)`; nothing further is canonicalized,
//! so distinct stored triples can denote the same physical point (any φ
//! when θ = 0 or r = 0). Equality therefore goes through Cartesian form,
//! which is free of those degeneracies.

use serde::{Deserialize, Serialize};

use super::cartesian::CartesianCoordinate;
use super::errors::{check_finite, CoordinateError, Result};
use super::Coordinate;
use crate::constants::{DEG2RAD, RAD2DEG, TAU};

/// Spherical coordinate value: azimuth φ, inclination θ, radius r
///
/// Immutable; `with_*` methods return new values. Obtain shared instances
/// through the interning pool.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SphericCoordinate {
    /// Azimuth in radians (longitude), reduced into (-2π, 2π)
    pub phi: f64,
    /// Inclination in radians (angle from the +z axis), reduced into (-2π, 2π)
    pub theta: f64,
    /// Radius, always >= 0
    pub radius: f64,
}

impl SphericCoordinate {
    /// Creates a validated spherical coordinate
    ///
    /// Rejects a negative radius and non-finite components; reduces both
    /// angles modulo 2π. Angle input is expected in radians.
    ///
    /// # Errors
    ///
    /// [`CoordinateError::NegativeRadius`] when `radius < 0`,
    /// [`CoordinateError::NonFinite`] when any component is NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locus::coordinates::SphericCoordinate;
    ///
    /// let c = SphericCoordinate::new(0.5, 1.0, 2.0).unwrap();
    /// assert_eq!(c.radius, 2.0);
    ///
    /// assert!(SphericCoordinate::new(0.0, 0.0, -1.0).is_err());
    /// ```
    pub fn new(phi: f64, theta: f64, radius: f64) -> Result<Self> {
        let phi = check_finite("phi", phi)?;
        let theta = check_finite("theta", theta)?;
        let radius = check_finite("radius", radius)?;
        if radius < 0.0 {
            log::debug!("rejecting spherical coordinate with radius {radius}");
            return Err(CoordinateError::NegativeRadius { radius });
        }
        Ok(Self::from_parts(phi, theta, radius))
    }

    /// Builds from components already known to be valid (radius >= 0,
    /// everything finite); still reduces the angles.
    pub(crate) fn from_parts(phi: f64, theta: f64, radius: f64) -> Self {
        debug_assert!(radius >= 0.0);
        SphericCoordinate {
            phi: phi % TAU,
            theta: theta % TAU,
            radius,
        }
    }

    /// The degenerate origin triple (0, 0, 0), used as the fixed image of
    /// the Cartesian origin
    pub(crate) fn origin() -> Self {
        SphericCoordinate {
            phi: 0.0,
            theta: 0.0,
            radius: 0.0,
        }
    }

    /// Creates a validated spherical coordinate with angles in degrees
    ///
    /// # Errors
    ///
    /// Same as [`SphericCoordinate::new`].
    pub fn from_degrees(phi_deg: f64, theta_deg: f64, radius: f64) -> Result<Self> {
        Self::new(phi_deg * DEG2RAD, theta_deg * DEG2RAD, radius)
    }

    /// The azimuth in degrees
    pub fn phi_degrees(&self) -> f64 {
        self.phi * RAD2DEG
    }

    /// The inclination in degrees
    pub fn theta_degrees(&self) -> f64 {
        self.theta * RAD2DEG
    }

    /// Returns a copy with the azimuth replaced (reduced modulo 2π)
    pub fn with_phi(&self, phi: f64) -> Result<Self> {
        Self::new(phi, self.theta, self.radius)
    }

    /// Returns a copy with the inclination replaced (reduced modulo 2π)
    pub fn with_theta(&self, theta: f64) -> Result<Self> {
        Self::new(self.phi, theta, self.radius)
    }

    /// Returns a copy with the radius replaced
    ///
    /// # Errors
    ///
    /// [`CoordinateError::NegativeRadius`] when `radius < 0`.
    pub fn with_radius(&self, radius: f64) -> Result<Self> {
        Self::new(self.phi, self.theta, radius)
    }
}

impl Coordinate for SphericCoordinate {
    /// Standard spherical-to-Cartesian transform
    ///
    /// `x = r sinθ cosφ`, `y = r sinθ sinφ`, `z = r cosθ`. Bijective away
    /// from the origin; the origin maps to (0, 0, 0).
    fn as_cartesian(&self) -> CartesianCoordinate {
        let sin_theta = self.theta.sin();
        CartesianCoordinate::new(
            self.radius * sin_theta * self.phi.cos(),
            self.radius * sin_theta * self.phi.sin(),
            self.radius * self.theta.cos(),
        )
    }

    /// Identity conversion; no allocation, no recomputation
    fn as_spheric(&self) -> SphericCoordinate {
        *self
    }

    /// Physical-point equality via Cartesian form
    ///
    /// Comparing stored angles directly yields false negatives when φ
    /// differs by 2π or when θ makes φ meaningless, so both sides are
    /// compared in the degeneracy-free representation instead.
    fn is_equal(&self, other: &dyn Coordinate) -> bool {
        self.as_cartesian().is_equal(&other.as_cartesian())
    }
}

impl PartialEq for SphericCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

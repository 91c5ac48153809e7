//! Coordinate representations and cross-representation metrics
//!
//! A point in 3D space has two interchangeable encodings: rectangular
//! [`CartesianCoordinate`] and angular [`SphericCoordinate`]. Both satisfy
//! the [`Coordinate`] capability, which carries the shared distance and
//! angle computations so the two concrete types cannot diverge in formula.

pub mod cartesian;
pub mod errors;
pub mod spheric;

pub use cartesian::CartesianCoordinate;
pub use errors::CoordinateError;
pub use spheric::SphericCoordinate;

/// Capability shared by every coordinate representation
///
/// Concrete types implement only the two conversion primitives and
/// tolerance equality; the metric operations are provided once in terms of
/// those primitives. Self-conversion is an identity (`as_cartesian` on a
/// Cartesian value returns a copy of itself, no recomputation), so
/// normalizing both operands to a common representation is cheap whenever
/// they already match.
pub trait Coordinate {
    /// This point in rectangular form
    fn as_cartesian(&self) -> CartesianCoordinate;

    /// This point in angular form
    fn as_spheric(&self) -> SphericCoordinate;

    /// Tolerance-based value equality, meaningful across representations
    fn is_equal(&self, other: &dyn Coordinate) -> bool;

    /// Euclidean distance between two points
    ///
    /// Both operands are normalized to Cartesian form first. Symmetric,
    /// non-negative, and zero exactly when the operands coincide.
    fn cartesian_distance(&self, other: &dyn Coordinate) -> f64 {
        let a = self.as_cartesian();
        let b = other.as_cartesian();
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let dz = b.z - a.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Angular separation of two points as seen from the origin, in
    /// radians within [0, π]
    ///
    /// Both operands are normalized to spherical form and the spherical
    /// law of cosines is applied in its inclination form,
    /// `acos(cosθ1·cosθ2 + sinθ1·sinθ2·cos|Δφ|)`, matching θ measured
    /// from the +z axis as `as_spheric` produces it. Rounding can push
    /// the cosine slightly past ±1 for near-identical or antipodal
    /// points, so the argument is clamped before `acos`.
    fn central_angle(&self, other: &dyn Coordinate) -> f64 {
        let a = self.as_spheric();
        let b = other.as_spheric();
        let cos_angle = a.theta.cos() * b.theta.cos()
            + a.theta.sin() * b.theta.sin() * (a.phi - b.phi).abs().cos();
        cos_angle.clamp(-1.0, 1.0).acos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn cart(x: f64, y: f64, z: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(x, y, z)
    }

    #[test]
    fn test_distance_matches_hand_computed_values() {
        // Pairwise distances computed by hand
        let coords = [
            cart(0.0, 0.0, 0.0),
            cart(1.0, 2.0, 3.0),
            cart(5.0, -2.0, 4.0),
            cart(-12.0, 1.0, 8.0),
        ];
        let expected = [
            [0.0, 3.741657, 6.708204, 14.456832],
            [3.741657, 0.0, 5.744563, 13.96424],
            [6.708204, 5.744563, 0.0, 17.720045],
            [14.456832, 13.96424, 17.720045, 0.0],
        ];

        for (i, a) in coords.iter().enumerate() {
            for (j, b) in coords.iter().enumerate() {
                let d = a.cartesian_distance(b);
                assert!(
                    (d - expected[i][j]).abs() < 1e-4,
                    "d(coords[{i}], coords[{j}]) = {d}, expected {}",
                    expected[i][j]
                );
            }
        }
    }

    #[test]
    fn test_distance_symmetry_and_identity() {
        let a = cart(1.0, 2.0, 3.0);
        let b = cart(5.0, -2.0, 4.0);
        assert_eq!(a.cartesian_distance(&b), b.cartesian_distance(&a));
        assert_eq!(a.cartesian_distance(&a), 0.0);
    }

    #[test]
    fn test_distance_across_representations() {
        let a = cart(1.0, 2.0, 3.0);
        let b_spheric = cart(5.0, -2.0, 4.0).as_spheric();
        let d = a.cartesian_distance(&b_spheric);
        assert!((d - 5.744563).abs() < 1e-4, "distance was {d}");
    }

    #[test]
    fn test_central_angle_identity() {
        let a = SphericCoordinate::new(0.3, 1.2, 2.0).unwrap();
        // sin^2 + cos^2 rounds just below 1.0 for some angles
        assert!(a.central_angle(&a) < 1e-6);
    }

    #[test]
    fn test_central_angle_known_value() {
        let a = SphericCoordinate::new(0.0, 1.0, 1.0).unwrap();
        let b = SphericCoordinate::new(0.5, 0.25, 5.5).unwrap();

        // Independent computation of the spherical law of cosines
        // (inclination form, theta measured from the +z axis)
        let expected = (1.0_f64.cos() * 0.25_f64.cos()
            + 1.0_f64.sin() * 0.25_f64.sin() * 0.5_f64.cos())
        .acos();
        let angle = a.central_angle(&b);
        assert!((angle - expected).abs() < 1e-4, "angle was {angle}");
        assert!((0.0..=PI).contains(&angle));
    }

    #[test]
    fn test_central_angle_axis_separations() {
        // The inclination convention: theta is measured from +z, so the
        // pole-to-equator separation is pi/2 and pole-to-pole is pi.
        let up = cart(0.0, 0.0, 1.0);
        let down = cart(0.0, 0.0, -1.0);
        let east = cart(1.0, 0.0, 0.0);
        let west = cart(-1.0, 0.0, 0.0);

        assert!((up.central_angle(&east) - PI / 2.0).abs() < 1e-12);
        assert!((up.central_angle(&down) - PI).abs() < 1e-12);
        assert!((east.central_angle(&west) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_central_angle_clamps_near_identical_points() {
        // Rounding in the law of cosines can exceed 1.0 without a clamp
        let a = SphericCoordinate::new(1.0 + 1e-16, 0.5, 1.0).unwrap();
        let b = SphericCoordinate::new(1.0, 0.5 + 1e-16, 1.0).unwrap();
        let angle = a.central_angle(&b);
        assert!(angle.is_finite(), "angle must not be NaN");
        assert!(angle.abs() < 1e-6);
    }

    #[test]
    fn test_central_angle_clamps_antipodal_points() {
        let a = cart(1.0, 1e-12, -1e-12);
        let b = cart(-1.0, -1e-12, 1e-12);
        let angle = a.central_angle(&b);
        assert!(angle.is_finite(), "angle must not be NaN");
        assert!((angle - PI).abs() < 1e-5, "angle was {angle}");
    }

    #[test]
    fn test_dyn_dispatch_over_mixed_operands() {
        let points: Vec<Box<dyn Coordinate>> = vec![
            Box::new(cart(1.0, 2.0, 3.0)),
            Box::new(cart(1.0, 2.0, 3.0).as_spheric()),
        ];
        // Both encodings of the same point agree with each other
        assert!(points[0].is_equal(points[1].as_ref()));
        assert!(points[0].cartesian_distance(points[1].as_ref()) < 1e-6);
    }
}

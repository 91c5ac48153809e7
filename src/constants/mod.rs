//! Numeric policy constants for coordinate comparisons

use std::f64::consts::PI;

// Tolerance
/// Maximum per-component difference for two coordinate values to compare equal
pub const EPSILON: f64 = 1e-6;

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

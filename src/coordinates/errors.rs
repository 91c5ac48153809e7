//! Error types for coordinate construction and conversion

use thiserror::Error;

/// Main error type for coordinate operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// Error when a spherical radius is negative
    #[error("Radius cannot be negative (got {radius})")]
    NegativeRadius {
        /// The rejected radius value
        radius: f64,
    },

    /// Error when a component passed to a constructor is NaN or infinite
    #[error("Component {component} must be finite (got {value})")]
    NonFinite {
        /// Name of the offending component
        component: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Error when a geometric formula's domain is violated unexpectedly
    #[error("Numeric domain violation: {0}")]
    NumericDomain(String),
}

/// Extension of the Result type for coordinate operations
pub type Result<T> = std::result::Result<T, CoordinateError>;

/// Helper to validate that a constructor argument is finite
pub(crate) fn check_finite(component: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoordinateError::NonFinite { component, value })
    }
}

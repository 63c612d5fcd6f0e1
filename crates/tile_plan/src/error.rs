//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants
//! cover invalid plan parameters and polygons, and field-of-view dependent queries issued before
//! the field of view is known.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("{plan} requires fov_width and fov_height to be set")]
    MissingFov { plan: &'static str },
}

/// Fails with [`Error::InvalidConfig`] unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} must be > 0, got {value}")))
    }
}

/// Fails with [`Error::InvalidConfig`] unless `value` is finite.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!("{name} must be finite, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fov_names_the_plan() {
        let err = Error::MissingFov {
            plan: "GridFromEdges",
        };
        assert_eq!(
            err.to_string(),
            "GridFromEdges requires fov_width and fov_height to be set"
        );
    }

    #[test]
    fn ensure_positive_rejects_zero_negative_and_nan() {
        assert!(ensure_positive("width", 1.5).is_ok());
        assert!(matches!(
            ensure_positive("width", 0.0),
            Err(Error::InvalidConfig(ref msg)) if msg.contains("width")
        ));
        assert!(ensure_positive("width", -2.0).is_err());
        assert!(ensure_positive("width", f64::NAN).is_err());
        assert!(ensure_finite("left", f64::INFINITY).is_err());
        assert!(ensure_finite("left", -3.0).is_ok());
    }
}

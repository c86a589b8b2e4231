//! Mesh and Configuration Error Types

use thiserror::Error;

/// Structural violations of the landmark input contract
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Landmark count differs from the fixed topology
    #[error("Expected {expected} landmarks, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },

    /// Raw landmark index outside the fixed topology
    #[error("Landmark index {index} is out of range for a {len}-point mesh")]
    IndexOutOfRange { index: usize, len: usize },

    /// Landmark coordinate is NaN or infinite
    #[error("Landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    /// Image width or height is zero
    #[error("Invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Invalid threshold configuration, detected at startup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Value outside its allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Two thresholds that must be strictly ordered are not
    #[error("{lower} ({lower_value}) must be less than {upper} ({upper_value})")]
    Ordering {
        lower: &'static str,
        lower_value: f64,
        upper: &'static str,
        upper_value: f64,
    },
}

impl ConfigError {
    /// Check that `value` lies within `[min, max]`
    pub fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), Self> {
        if value.is_finite() && value >= min && value <= max {
            Ok(())
        } else {
            Err(Self::OutOfRange {
                field,
                value: f64::from(value),
                min: f64::from(min),
                max: f64::from(max),
            })
        }
    }

    /// Check that `lower < upper`
    pub fn check_order(
        lower: &'static str,
        lower_value: f32,
        upper: &'static str,
        upper_value: f32,
    ) -> Result<(), Self> {
        if lower_value < upper_value {
            Ok(())
        } else {
            Err(Self::Ordering {
                lower,
                lower_value: f64::from(lower_value),
                upper,
                upper_value: f64::from(upper_value),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert!(ConfigError::check_range("padding", 0.15, 0.0, 1.0).is_ok());
        assert!(ConfigError::check_range("padding", -0.1, 0.0, 1.0).is_err());
        assert!(ConfigError::check_range("padding", f32::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_check_order() {
        assert!(ConfigError::check_order("narrow_max", 0.25, "medium_max", 0.35).is_ok());
        let err = ConfigError::check_order("narrow_max", 0.35, "medium_max", 0.25).unwrap_err();
        assert!(err.to_string().contains("narrow_max"));
    }
}

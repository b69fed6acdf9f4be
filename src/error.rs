//! Error types for layout and animation configuration

use thiserror::Error;

/// Configuration misuse, reported before any item is generated or animated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A per-kind item count was zero
    #[error("{kind} count must be at least 1")]
    ZeroCount {
        kind: &'static str,
    },

    /// A dimension, exponent or time constant was zero, negative or not finite
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive {
        field: &'static str,
        value: f32,
    },

    /// A sampling range had min > max or a non-finite bound
    #[error("{field} range is invalid: [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    /// A probability or material parameter fell outside [0, 1]
    #[error("{field} must lie in [0, 1], got {value}")]
    OutOfUnitInterval {
        field: &'static str,
        value: f32,
    },

    /// Item ids are u32 and the whole layout is allocated up front
    #[error("layout would hold {count} items, the limit is {max}")]
    TooManyItems {
        count: usize,
        max: usize,
    },

    /// The scene always carries exactly one star
    #[error("star count must be exactly 1, got {0}")]
    StarCount(usize),

    /// Preset text could not be parsed
    #[error("YAML parse error: {0}")]
    Yaml(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Yaml(e.to_string())
    }
}

/// Fail unless `value` is strictly positive and finite
pub(crate) fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Fail unless `min <= max` and both bounds are finite
pub(crate) fn ensure_range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange { field, min, max })
    }
}

/// Fail unless `value` lies in the closed unit interval
pub(crate) fn ensure_unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitInterval { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("radius", 3.5).is_ok());
        assert_eq!(
            ensure_positive("radius", -1.0),
            Err(ConfigError::NonPositive { field: "radius", value: -1.0 })
        );
        assert!(ensure_positive("radius", 0.0).is_err());
        assert!(ensure_positive("radius", f32::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_range() {
        assert!(ensure_range("scale", 0.2, 0.5).is_ok());
        assert!(ensure_range("scale", 0.3, 0.3).is_ok());
        assert!(ensure_range("scale", 0.5, 0.2).is_err());
        assert!(ensure_range("scale", f32::NAN, 0.2).is_err());
    }

    #[test]
    fn test_ensure_unit() {
        assert!(ensure_unit("metalness", 0.0).is_ok());
        assert!(ensure_unit("metalness", 1.0).is_ok());
        assert!(ensure_unit("metalness", 1.2).is_err());
        assert!(ensure_unit("metalness", f32::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        let e = ConfigError::ZeroCount { kind: "foliage" };
        assert_eq!(e.to_string(), "foliage count must be at least 1");

        let e = ConfigError::TooManyItems { count: 2_000_000, max: 1_000_000 };
        assert_eq!(e.to_string(), "layout would hold 2000000 items, the limit is 1000000");

        let e = ConfigError::StarCount(2);
        assert_eq!(e.to_string(), "star count must be exactly 1, got 2");
    }
}

use std::path::Path;

use na::vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    flog,
    types::{Float, Point2},
    DEFAULT_GRAVITY,
};

pub const MIN_SEGMENT_COUNT: usize = 2;
/// Upper end of the recommended range. Larger counts are accepted.
pub const RECOMMENDED_MAX_SEGMENT_COUNT: usize = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("segment count must be at least 2, got {0}")]
    SegmentCount(usize),
    #[error("segment rest length must be finite and positive, got {0}")]
    RestLength(Float),
    #[error("constraint iterations must be at least 1")]
    ConstraintIterations,
    #[error("gravity must be finite, got [{0}, {1}]")]
    Gravity(Float, Float),
    #[error("line width must be finite and non-negative, got {0}")]
    LineWidth(Float),
    #[error("fixed time step must be finite and positive, got {0}")]
    FixedDt(Float),
    #[error("failed to parse rope config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read rope config: {0}")]
    Io(#[from] std::io::Error),
}

/// Tunable parameters of a rope. Every field may change between steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RopeConfig {
    pub segment_rest_length: Float, // distance between adjacent points at rest
    pub segment_count: usize,       // number of points in the chain
    pub gravity: [Float; 2],        // acceleration applied each step
    pub line_width: Float,          // rendering only
    pub constraint_iterations: usize,
    pub fixed_dt: Float,
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            segment_rest_length: 0.25,
            segment_count: 35,
            gravity: DEFAULT_GRAVITY,
            line_width: 0.1,
            constraint_iterations: 50,
            fixed_dt: 0.02,
        }
    }
}

impl RopeConfig {
    pub fn gravity(&self) -> Point2 {
        vector![self.gravity[0], self.gravity[1]]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_segment_count(self.segment_count)?;
        validate_rest_length(self.segment_rest_length)?;
        validate_iterations(self.constraint_iterations)?;
        validate_gravity(&self.gravity())?;
        validate_line_width(self.line_width)?;
        if !self.fixed_dt.is_finite() || self.fixed_dt <= 0. {
            return Err(ConfigError::FixedDt(self.fixed_dt));
        }
        Ok(())
    }

    /// Parse a JSON config. Missing fields take their default values.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: RopeConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(&path)?;
        let config = Self::from_json_str(&data)?;
        flog!(
            "loaded rope config from {}: {} segments of {}",
            path.as_ref().display(),
            config.segment_count,
            config.segment_rest_length
        );
        Ok(config)
    }
}

pub(crate) fn validate_segment_count(count: usize) -> Result<(), ConfigError> {
    if count < MIN_SEGMENT_COUNT {
        return Err(ConfigError::SegmentCount(count));
    }
    if count > RECOMMENDED_MAX_SEGMENT_COUNT {
        flog!(
            "segment count {} is above the recommended maximum of {}",
            count,
            RECOMMENDED_MAX_SEGMENT_COUNT
        );
    }
    Ok(())
}

pub(crate) fn validate_rest_length(length: Float) -> Result<(), ConfigError> {
    if !length.is_finite() || length <= 0. {
        return Err(ConfigError::RestLength(length));
    }
    Ok(())
}

pub(crate) fn validate_iterations(iterations: usize) -> Result<(), ConfigError> {
    if iterations == 0 {
        return Err(ConfigError::ConstraintIterations);
    }
    Ok(())
}

pub(crate) fn validate_gravity(gravity: &Point2) -> Result<(), ConfigError> {
    if !gravity.iter().all(|g| g.is_finite()) {
        return Err(ConfigError::Gravity(gravity.x, gravity.y));
    }
    Ok(())
}

pub(crate) fn validate_line_width(width: Float) -> Result<(), ConfigError> {
    if !width.is_finite() || width < 0. {
        return Err(ConfigError::LineWidth(width));
    }
    Ok(())
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = RopeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.constraint_iterations, 50);
        assert_eq!(config.gravity(), vector![0., -1.]);
    }

    #[test]
    fn rejects_short_chain() {
        let config = RopeConfig {
            segment_count: 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SegmentCount(1))
        ));
    }

    #[test]
    fn rejects_non_positive_rest_length() {
        for length in [0., -0.5, Float::NAN, Float::INFINITY] {
            let config = RopeConfig {
                segment_rest_length: length,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::RestLength(_))));
        }
    }

    #[test]
    fn rejects_zero_iterations() {
        let config = RopeConfig {
            constraint_iterations: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ConstraintIterations)
        ));
    }

    #[test]
    fn accepts_count_above_recommended_range() {
        let config = RopeConfig {
            segment_count: 250,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_json() {
        // Arrange
        let json = r#"{ "segment_count": 10, "gravity": [0.0, -9.81] }"#;

        // Act
        let config = RopeConfig::from_json_str(json).unwrap();

        // Assert
        assert_eq!(config.segment_count, 10);
        assert_eq!(config.gravity, [0., -9.81]);
        assert_eq!(config.segment_rest_length, 0.25);
        assert_eq!(config.fixed_dt, 0.02);
    }

    #[test]
    fn parse_rejects_invalid_values() {
        let json = r#"{ "segment_rest_length": -1.0 }"#;
        assert!(matches!(
            RopeConfig::from_json_str(json),
            Err(ConfigError::RestLength(_))
        ));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(
            RopeConfig::from_json_str("{ segment_count: "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            RopeConfig::from_path("does/not/exist.json"),
            Err(ConfigError::Io(_))
        ));
    }
}

use serde::{Deserialize, Serialize};

use super::ConfigurationError;

/// Step used when none is configured
pub const DEFAULT_STEP: f64 = 1.0;

/// The bounds and granularity of a slider
///
/// A `RangeConfig` can only be built through [`RangeConfig::new`] (or by
/// deserializing), both of which reject `min >= max`, `step <= 0`,
/// non-finite fields and ranges whose span overflows. Every other type in the crate can therefore rely on a
/// well-formed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRangeConfig")]
pub struct RangeConfig {
    min: f64,
    max: f64,
    step: f64,
}

#[derive(Deserialize)]
struct RawRangeConfig {
    min: f64,
    max: f64,
    #[serde(default = "default_step")]
    step: f64,
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

impl TryFrom<RawRangeConfig> for RangeConfig {
    type Error = ConfigurationError;

    fn try_from(raw: RawRangeConfig) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max, raw.step)
    }
}

impl RangeConfig {
    /// Create a validated configuration
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigurationError> {
        let config = Self { min, max, step };

        if let Err(error) = config.validate() {
            tracing::warn!(min, max, step, %error, "rejected range configuration");
            return Err(error);
        }

        Ok(config)
    }

    /// Create a validated configuration that snaps to whole numbers
    pub fn with_default_step(min: f64, max: f64) -> Result<Self, ConfigurationError> {
        Self::new(min, max, DEFAULT_STEP)
    }

    /// The lowest value a handle can take
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The highest value a handle can take
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The granularity values snap to
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The distance between `min` and `max`
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check if a value lies within the bounds (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        for (field, value) in [("min", self.min), ("max", self.max), ("step", self.step)] {
            if !value.is_finite() {
                return Err(ConfigurationError::NonFinite { field, value });
            }
        }

        if self.min >= self.max {
            return Err(ConfigurationError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }

        if !self.span().is_finite() {
            return Err(ConfigurationError::SpanOverflow {
                min: self.min,
                max: self.max,
            });
        }

        if self.step <= 0.0 {
            return Err(ConfigurationError::InvalidStep(self.step));
        }

        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::range::{ConfigurationError, RangeConfig, DEFAULT_STEP};

/// Padding used when none is configured
pub const DEFAULT_PADDING: &str = "12px";

/// The properties a host passes to a range slider
///
/// `min` and `max` are required. Everything else falls back to a default
/// when constructed with [`SliderProps::default_for`] or when the field is
/// missing from serialized input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderProps {
    /// The lowest value a handle can take
    pub min: f64,

    /// The highest value a handle can take
    pub max: f64,

    /// The granularity values snap to
    #[serde(default = "default_step")]
    pub step: f64,

    /// One value per handle. May be empty.
    #[serde(default)]
    pub value: Vec<f64>,

    /// Presentation-only padding around the track, passed through untouched
    #[serde(default = "default_padding")]
    pub padding: String,
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

fn default_padding() -> String {
    DEFAULT_PADDING.to_string()
}

impl SliderProps {
    /// Props for a range with every other property at its default
    pub fn default_for(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: default_step(),
            value: Vec::new(),
            padding: default_padding(),
        }
    }

    /// Replace the step
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Replace the handle values
    pub fn with_value(mut self, value: Vec<f64>) -> Self {
        self.value = value;
        self
    }

    /// Replace the padding
    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Validate the numeric part of the props
    pub fn config(&self) -> Result<RangeConfig, ConfigurationError> {
        RangeConfig::new(self.min, self.max, self.step)
    }
}

use itertools::Itertools;

use crate::{slider::Track, utility::Percentage};

use super::RangeConfig;

/// Converts between slider values, normalised fractions and display positions
///
/// The calculator holds nothing but an immutable [`RangeConfig`], so every
/// operation is a pure function of its arguments. Hosts can rebuild or share
/// calculators freely between renders.
///
/// Per-value inputs are not validated: passing NaN or infinity is the
/// caller's responsibility and propagates into the result. [`crate::RangeSlider`]
/// rejects non-finite values before they reach the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeCalculator {
    config: RangeConfig,
}

impl RangeCalculator {
    /// Create a calculator for a validated configuration
    pub fn new(config: RangeConfig) -> Self {
        Self { config }
    }

    /// The configuration this calculator works within
    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Map a value to its fraction of the way from `min` to `max`
    ///
    /// Values outside the range are passed through, producing fractions
    /// outside `[0, 1]`. Use [`Self::normalize_clamped`] to pin them.
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.config.min()) / self.config.span()
    }

    /// Map a value to a fraction, clamping the value into range first
    pub fn normalize_clamped(&self, value: f64) -> f64 {
        self.normalize(self.clamp(value))
    }

    /// Map a fraction back to a value, clamped into range
    pub fn denormalize(&self, fraction: f64) -> f64 {
        self.clamp(self.config.min() + fraction * self.config.span())
    }

    /// Pin a value to `[min, max]`
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.config.min() {
            self.config.min()
        } else if value > self.config.max() {
            self.config.max()
        } else {
            value
        }
    }

    /// Snap a value to the nearest multiple of the step, without clamping
    ///
    /// Halfway cases round away from zero.
    pub fn round_to_nearest(&self, value: f64) -> f64 {
        let step = self.config.step();
        (value / step).round() * step
    }

    /// Snap a value to the nearest multiple of the step, then clamp it
    pub fn round(&self, value: f64) -> f64 {
        self.clamp(self.round_to_nearest(value))
    }

    /// The position of a value as a percentage of the track
    pub fn percentage(&self, value: f64) -> Percentage {
        Percentage::from_fraction(self.normalize(value))
    }

    /// The position of a value formatted for rendering, e.g. `"50%"`
    pub fn position(&self, value: f64) -> String {
        self.percentage(value).to_string()
    }

    /// Normalise every value, preserving order
    pub fn normalize_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|value| self.normalize(*value)).collect_vec()
    }

    /// Round and clamp every value, preserving order
    pub fn round_all(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|value| self.round(*value)).collect_vec()
    }

    /// Format the position of every value, preserving order
    pub fn positions(&self, values: &[f64]) -> Vec<String> {
        values.iter().map(|value| self.position(*value)).collect_vec()
    }

    /// The pixel coordinate of a value along a track
    pub fn offset(&self, value: f64, track: &Track) -> f64 {
        track.offset_at(self.normalize(value))
    }

    /// The stepped value under a pointer coordinate on a track
    pub fn value_at(&self, pointer: f64, track: &Track) -> f64 {
        self.round(self.denormalize(track.fraction_at(pointer)))
    }
}

impl From<RangeConfig> for RangeCalculator {
    fn from(config: RangeConfig) -> Self {
        Self::new(config)
    }
}

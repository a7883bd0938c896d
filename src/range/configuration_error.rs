use thiserror::Error;

/// Reasons a slider configuration can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigurationError {
    /// The minimum is not strictly below the maximum
    #[error("Invalid range: min ({min}) must be less than max ({max})")]
    InvalidBounds {
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },

    /// The distance between min and max overflows to infinity
    #[error("Invalid range: span from {min} to {max} is too wide to represent")]
    SpanOverflow {
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },

    /// The step is zero or negative
    #[error("Invalid step: {0} must be greater than zero")]
    InvalidStep(f64),

    /// A field is NaN or infinite
    #[error("Invalid {field}: {value} is not a finite number")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
        /// The value it was given
        value: f64,
    },
}

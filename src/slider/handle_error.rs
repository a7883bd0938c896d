use thiserror::Error;

/// Reasons an operation on a set of handle values can fail
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HandleError {
    /// The handle index doesn't refer to a value in the set
    #[error("No handle at index {index} (there are {count})")]
    IndexOutOfRange {
        /// Requested handle index
        index: usize,
        /// Number of handles in the set
        count: usize,
    },

    /// A handle value is NaN or infinite
    #[error("Handle {index} has a non-finite value: {value}")]
    NonFiniteValue {
        /// Index of the offending handle
        index: usize,
        /// The value it was given
        value: f64,
    },

    /// The track has no usable extent
    #[error("Invalid track: origin {origin}, length {length}")]
    InvalidTrack {
        /// Pixel coordinate of the start of the track
        origin: f64,
        /// Pixel length of the track
        length: f64,
    },
}

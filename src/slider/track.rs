use super::HandleError;

/// The pixel extent a slider's handles move along
///
/// `origin` is the coordinate of the `min` end of the track, in the same
/// space as the pointer coordinates passed to [`Track::fraction_at`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    origin: f64,
    length: f64,
}

impl Track {
    /// Create a track, rejecting non-finite coordinates and non-positive lengths
    pub fn new(origin: f64, length: f64) -> Result<Self, HandleError> {
        if !origin.is_finite() || !length.is_finite() || length <= 0.0 {
            return Err(HandleError::InvalidTrack { origin, length });
        }

        Ok(Self { origin, length })
    }

    /// Pixel coordinate of the start of the track
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Pixel length of the track
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The unclamped fraction of the track at a pointer coordinate
    pub fn fraction_at(&self, pointer: f64) -> f64 {
        (pointer - self.origin) / self.length
    }

    /// The pixel coordinate at a fraction of the track
    pub fn offset_at(&self, fraction: f64) -> f64 {
        self.origin + fraction * self.length
    }
}

use std::fmt;

/// A fraction presented as a percentage, e.g. for a handle's CSS `left`
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Percentage {
    fraction: f64,
}

impl Percentage {
    /// 0%
    pub fn zero() -> Self {
        Self::from_fraction(0.0)
    }

    /// 100%
    pub fn full() -> Self {
        Self::from_fraction(1.0)
    }

    /// Create a percentage from a fraction, where 1.0 is 100%
    pub fn from_fraction(fraction: f64) -> Self {
        Self { fraction }
    }

    /// Create a percentage from a number of percent
    pub fn from_percent(percent: f64) -> Self {
        Self {
            fraction: percent / 100.0,
        }
    }

    /// Convert to a fraction
    pub fn as_fraction(&self) -> f64 {
        self.fraction
    }

    /// Convert to a number of percent
    pub fn as_percent(&self) -> f64 {
        self.fraction * 100.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percent = self.as_percent();

        // -0.0 would otherwise render as "-0%"
        if percent == 0.0 {
            return write!(f, "0%");
        }

        write!(f, "{percent}%")
    }
}

impl From<Percentage> for String {
    fn from(percentage: Percentage) -> Self {
        percentage.to_string()
    }
}

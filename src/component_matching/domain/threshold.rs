use crate::shared::error::VibeCheckError;
use crate::shared::Result;

/// Minimum combined score a pair needs to be reported
///
/// Always finite and within 0..=100; construction is the only place a
/// threshold is checked.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: f64 = 70.0;

    /// Validates a caller supplied threshold
    ///
    /// # Errors
    /// Returns `VibeCheckError::InvalidThreshold` for NaN, infinities and
    /// values outside 0..=100. Values are never coerced.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(VibeCheckError::InvalidThreshold { value }.into());
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn admits(&self, score: f64) -> bool {
        score >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

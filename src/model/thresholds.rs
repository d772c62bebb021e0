use std::fmt;

use crate::model::{EvalError, in_confidence_range};

/// Minimum confidence a detection needs to count toward a decision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Value used by this deployment when no threshold is configured.
    pub const DEPLOYMENT_DEFAULT: f64 = 80.0;
    /// Value the analysis service applies when the caller sends none.
    pub const SERVICE_DEFAULT: f64 = 50.0;

    pub fn new(value: f64) -> Result<Self, EvalError> {
        if in_confidence_range(value) {
            Ok(Self(value))
        } else {
            Err(EvalError::InvalidThreshold(value))
        }
    }

    pub fn service_default() -> Self {
        Self(Self::SERVICE_DEFAULT)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn admits(self, confidence: f64) -> bool {
        confidence >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(Self::DEPLOYMENT_DEFAULT)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;

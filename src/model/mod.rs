pub mod detection;
pub mod thresholds;
pub mod verdict;

use thiserror::Error;

pub use detection::Detection;
pub use thresholds::Threshold;
pub use verdict::{Evaluation, LabelCounts, Verdict};

pub const CONFIDENCE_MIN: f64 = 0.0;
pub const CONFIDENCE_MAX: f64 = 100.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    #[error("invalid threshold {0}: must be within [0, 100]")]
    InvalidThreshold(f64),
    #[error("invalid confidence {confidence} for label {label:?}: must be within [0, 100]")]
    InvalidConfidence { label: String, confidence: f64 },
}

pub(crate) fn in_confidence_range(value: f64) -> bool {
    (CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&value)
}

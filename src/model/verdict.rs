use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::model::Threshold;

pub type LabelCounts = BTreeMap<String, u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Allowed,
    Rejected,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Allowed => "allowed",
            Verdict::Rejected => "rejected",
        }
    }

    pub fn is_rejected(self) -> bool {
        self == Verdict::Rejected
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub threshold: Threshold,
    pub label_counts: LabelCounts,
    pub verdict: Verdict,
    /// Disallowed labels present above threshold, in name order.
    pub matched_labels: Vec<String>,
    pub n_detections: usize,
    pub n_retained: usize,
}

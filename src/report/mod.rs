pub mod json;
pub mod text;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::input::DetectionSet;
use crate::input::response::VideoMetadata;
use crate::model::{Evaluation, Verdict};
use crate::policy::{TaxonomyRow, taxonomy_row};

pub const TOOL_NAME: &str = "kira-contentmod";

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub tool: ToolInfo,
    pub input: InputInfo,
    pub threshold: f64,
    pub verdict: Verdict,
    pub label_counts: BTreeMap<String, u32>,
    pub matched_labels: Vec<String>,
    pub taxonomy_row: TaxonomyRow,
    /// First time each retained label was seen, in milliseconds.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub first_seen_ms: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputInfo {
    pub path: String,
    pub n_detections: usize,
    pub n_retained: usize,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoMetadata>,
}

pub fn build_report(set: &DetectionSet, eval: &Evaluation) -> ReportData {
    let mut first_seen_ms: BTreeMap<String, i64> = BTreeMap::new();
    for det in &set.detections {
        if !eval.threshold.admits(det.confidence) {
            continue;
        }
        if let Some(ts) = det.timestamp_ms {
            first_seen_ms
                .entry(det.label.clone())
                .and_modify(|t| *t = (*t).min(ts))
                .or_insert(ts);
        }
    }

    ReportData {
        tool: ToolInfo {
            name: TOOL_NAME,
            version: env!("CARGO_PKG_VERSION"),
        },
        input: InputInfo {
            path: set.source.display().to_string(),
            n_detections: eval.n_detections,
            n_retained: eval.n_retained,
            truncated: set.truncated,
            model_version: set.model_version.clone(),
            video: set.video.clone(),
        },
        threshold: eval.threshold.value(),
        verdict: eval.verdict,
        label_counts: eval.label_counts.clone(),
        matched_labels: eval.matched_labels.clone(),
        taxonomy_row: taxonomy_row(&eval.label_counts, eval.verdict),
        first_seen_ms,
    }
}

/// `HH:MM:SS.mmm`; negative offsets clamp to zero.
pub fn format_timestamp_ms(ms: i64) -> String {
    let ms = ms.max(0);
    let total_secs = ms / 1000;
    let millis = ms % 1000;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        total_secs / 3600,
        (total_secs / 60) % 60,
        total_secs % 60,
        millis
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;

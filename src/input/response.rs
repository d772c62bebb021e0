//! Saved `GetContentModeration` responses.
//!
//! Only the fields the decision needs are modelled; anything else the service
//! returns is ignored.

use serde::{Deserialize, Serialize};

use crate::model::Detection;

pub const JOB_SUCCEEDED: &str = "SUCCEEDED";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentModerationResponse {
    #[serde(default)]
    pub job_status: Option<String>,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub video_metadata: Option<VideoMetadata>,
    #[serde(default)]
    pub moderation_labels: Vec<ContentModerationDetection>,
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(default)]
    pub moderation_model_version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_millis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_width: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentModerationDetection {
    #[serde(default)]
    pub timestamp: Option<i64>,
    pub moderation_label: ModerationLabel,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModerationLabel {
    pub name: String,
    pub confidence: f64,
    #[serde(default)]
    pub parent_name: Option<String>,
}

/// Detections produced by other tooling: `[{"label": .., "confidence": ..}]`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlainDetection {
    pub label: String,
    pub confidence: f64,
    #[serde(default)]
    pub timestamp_ms: Option<i64>,
}

impl ContentModerationResponse {
    pub fn succeeded(&self) -> bool {
        self.job_status.as_deref().is_none_or(|s| s == JOB_SUCCEEDED)
    }

    pub fn detections(&self) -> Vec<Detection> {
        self.moderation_labels
            .iter()
            .map(|d| {
                let label = &d.moderation_label;
                let mut det = Detection::new(label.name.clone(), label.confidence);
                if let Some(ts) = d.timestamp {
                    det = det.with_timestamp(ts);
                }
                if let Some(parent) = &label.parent_name {
                    det = det.with_parent(parent.clone());
                }
                det
            })
            .collect()
    }
}

impl From<PlainDetection> for Detection {
    fn from(value: PlainDetection) -> Self {
        let det = Detection::new(value.label, value.confidence);
        match value.timestamp_ms {
            Some(ts) => det.with_timestamp(ts),
            None => det,
        }
    }
}

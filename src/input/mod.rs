use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod response;
pub mod source;

use response::{ContentModerationResponse, PlainDetection, VideoMetadata};
use source::open_maybe_gz;

use crate::model::Detection;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a valid moderation response: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} is empty")]
    Empty { path: String },
    #[error("standard input (`-`) can only be given once")]
    DuplicateStdin,
    #[error("moderation job in {path} did not succeed (status {status}): {message}")]
    JobNotSucceeded {
        path: String,
        status: String,
        message: String,
    },
}

/// Everything read from one input for one video.
#[derive(Debug, Clone)]
pub struct DetectionSet {
    pub source: PathBuf,
    pub detections: Vec<Detection>,
    pub video: Option<VideoMetadata>,
    pub model_version: Option<String>,
    /// The service reported more pages than this input holds.
    pub truncated: bool,
}

pub fn load_detections(path: &Path) -> Result<DetectionSet, InputError> {
    let input_name = path.display().to_string();
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| InputError::Io {
            path: input_name.clone(),
            source,
        })?;
    let set = parse_detections(path, &text)?;
    tracing::debug!(
        input = %input_name,
        detections = set.detections.len(),
        "read moderation response"
    );
    Ok(set)
}

pub fn parse_detections(path: &Path, text: &str) -> Result<DetectionSet, InputError> {
    let input_name = path.display().to_string();
    if text.trim().is_empty() {
        return Err(InputError::Empty { path: input_name });
    }
    let json_err = |source| InputError::Json {
        path: input_name.clone(),
        source,
    };
    let value: serde_json::Value = serde_json::from_str(text).map_err(json_err)?;

    if value.is_array() {
        let plain: Vec<PlainDetection> = serde_json::from_value(value).map_err(json_err)?;
        return Ok(DetectionSet {
            source: path.to_path_buf(),
            detections: plain.into_iter().map(Detection::from).collect(),
            video: None,
            model_version: None,
            truncated: false,
        });
    }

    let response: ContentModerationResponse = serde_json::from_value(value).map_err(json_err)?;
    if !response.succeeded() {
        return Err(InputError::JobNotSucceeded {
            path: input_name,
            status: response.job_status.unwrap_or_default(),
            message: response
                .status_message
                .unwrap_or_else(|| "no status message".to_string()),
        });
    }
    let truncated = response.next_token.is_some();
    if truncated {
        tracing::warn!(
            input = %input_name,
            "response carries a NextToken; only the labels in this page are evaluated"
        );
    }
    Ok(DetectionSet {
        source: path.to_path_buf(),
        detections: response.detections(),
        video: response.video_metadata,
        model_version: response.moderation_model_version,
        truncated,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;

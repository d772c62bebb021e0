use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::policy::DisallowPolicy;
use crate::policy::mapping::{find_category, find_label};

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("IO error reading policy: {0}")]
    Io(#[from] std::io::Error),
    #[error("policy file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown moderation category: {0}")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyFile {
    #[serde(default)]
    pub disallowed_labels: Vec<String>,
    #[serde(default)]
    pub disallowed_categories: Vec<String>,
}

pub fn load_policy(path: &Path) -> Result<DisallowPolicy, PolicyError> {
    let reader = BufReader::new(File::open(path)?);
    let file: PolicyFile = serde_json::from_reader(reader)?;
    let policy = build_policy(&file)?;
    tracing::debug!(
        path = %path.display(),
        labels = policy.len(),
        "loaded disallow policy"
    );
    Ok(policy)
}

pub fn build_policy(file: &PolicyFile) -> Result<DisallowPolicy, PolicyError> {
    let mut policy = DisallowPolicy::empty();
    for name in &file.disallowed_categories {
        policy.insert_category(name)?;
    }
    for name in &file.disallowed_labels {
        if find_label(name).is_none() && find_category(name).is_none() {
            tracing::warn!(
                label = %name,
                "policy label is not in the builtin taxonomy; matching it verbatim"
            );
        }
        policy.insert_label(name);
    }
    Ok(policy)
}

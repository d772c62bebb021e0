use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::input::source::{input_stem, is_stdin};
use crate::input::{DetectionSet, InputError, load_detections};

#[derive(Debug, Clone)]
pub struct InputSpec {
    pub path: PathBuf,
    /// File stem used for this input's reports; unique within a batch.
    pub stem: String,
}

/// Assigns report stems, suffixing `_2`, `_3`, ... when inputs share a stem.
/// Stdin may appear once.
pub fn plan_inputs(paths: &[PathBuf]) -> Result<Vec<InputSpec>, InputError> {
    if paths.iter().filter(|p| is_stdin(p)).count() > 1 {
        return Err(InputError::DuplicateStdin);
    }
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    let mut out = Vec::with_capacity(paths.len());
    for path in paths {
        let base = input_stem(path);
        let n = seen.entry(base.clone()).or_insert(0);
        *n += 1;
        let stem = if *n == 1 {
            base
        } else {
            format!("{base}_{n}")
        };
        out.push(InputSpec {
            path: path.clone(),
            stem,
        });
    }
    Ok(out)
}

pub fn run_stage1(path: &Path) -> Result<DetectionSet, InputError> {
    let set = load_detections(path)?;
    if set.detections.is_empty() {
        tracing::info!(input = %path.display(), "no moderation labels reported");
    }
    Ok(set)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;

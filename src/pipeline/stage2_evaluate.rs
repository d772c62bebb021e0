use crate::model::{Detection, EvalError, Evaluation, LabelCounts, Threshold, Verdict};
use crate::model::in_confidence_range;
use crate::policy::DisallowPolicy;

/// Filters detections to `confidence >= threshold`, tallies them per label
/// and rejects when any disallowed label survives the filter.
pub fn evaluate(
    detections: &[Detection],
    threshold: f64,
    disallowed: &DisallowPolicy,
) -> Result<Evaluation, EvalError> {
    let threshold = Threshold::new(threshold)?;
    run_stage2(detections, threshold, disallowed)
}

pub fn run_stage2(
    detections: &[Detection],
    threshold: Threshold,
    disallowed: &DisallowPolicy,
) -> Result<Evaluation, EvalError> {
    // Validate everything first: no partial result on bad input.
    for det in detections {
        if !in_confidence_range(det.confidence) {
            return Err(EvalError::InvalidConfidence {
                label: det.label.clone(),
                confidence: det.confidence,
            });
        }
    }

    let mut label_counts = LabelCounts::new();
    let mut n_retained = 0usize;
    for det in detections.iter().filter(|d| threshold.admits(d.confidence)) {
        *label_counts.entry(det.label.clone()).or_insert(0) += 1;
        n_retained += 1;
    }

    let matched_labels: Vec<String> = label_counts
        .keys()
        .filter(|label| disallowed.contains(label))
        .cloned()
        .collect();
    let verdict = if matched_labels.is_empty() {
        Verdict::Allowed
    } else {
        Verdict::Rejected
    };

    Ok(Evaluation {
        threshold,
        label_counts,
        verdict,
        matched_labels,
        n_detections: detections.len(),
        n_retained,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_evaluate.rs"]
mod tests;

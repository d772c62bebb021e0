use std::fmt::Write;

use crate::report::{ReportData, format_timestamp_ms};

pub fn render_report_text(data: &ReportData) -> String {
    let mut out = String::new();

    out.push_str("Video Content Moderation Report\n");
    out.push_str("===============================\n\n");

    out.push_str("1. Input\n");
    let _ = writeln!(out, "Source: {}", data.input.path);
    if let Some(version) = &data.input.model_version {
        let _ = writeln!(out, "Moderation model: {version}");
    }
    if let Some(duration) = data.input.video.as_ref().and_then(|v| v.duration_millis) {
        let _ = writeln!(out, "Duration: {}", format_timestamp_ms(duration));
    }
    let _ = writeln!(out, "Detections reported: {}", data.input.n_detections);
    if data.input.truncated {
        out.push_str("Note: response was a single page of a longer result.\n");
    }
    out.push('\n');

    out.push_str("2. Decision\n");
    let _ = writeln!(out, "Minimum confidence: {}", data.threshold);
    let _ = writeln!(
        out,
        "Detections at or above threshold: {}",
        data.input.n_retained
    );
    let _ = writeln!(
        out,
        "Taxonomy hits counted: {}",
        data.taxonomy_row.total()
    );
    let _ = writeln!(out, "Verdict: {}", data.verdict);
    if !data.matched_labels.is_empty() {
        let _ = writeln!(out, "Rejected for: {}", data.matched_labels.join(", "));
    }
    out.push('\n');

    out.push_str("3. Label counts\n");
    if data.label_counts.is_empty() {
        out.push_str("(none)\n");
    }
    for (label, count) in &data.label_counts {
        match data.first_seen_ms.get(label) {
            Some(ts) => {
                let _ = writeln!(
                    out,
                    "{label}: {count} (first at {})",
                    format_timestamp_ms(*ts)
                );
            }
            None => {
                let _ = writeln!(out, "{label}: {count}");
            }
        }
    }

    out
}

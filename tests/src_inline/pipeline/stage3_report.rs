use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::input::{DetectionSet, InputError};
use crate::model::{Detection, Threshold};
use crate::pipeline::stage1_load::InputSpec;
use crate::pipeline::stage2_evaluate::run_stage2;
use crate::pipeline::{VideoError, VideoOutcome};
use crate::policy::DisallowPolicy;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_contentmod_report_{}_{}", std::process::id(), id));
    dir
}

fn outcome(stem: &str, detections: Vec<Detection>) -> VideoOutcome {
    let path = PathBuf::from(format!("{stem}.json"));
    let set = DetectionSet {
        source: path.clone(),
        detections,
        video: None,
        model_version: None,
        truncated: false,
    };
    let eval = run_stage2(
        &set.detections,
        Threshold::default(),
        &DisallowPolicy::builtin(),
    )
    .unwrap();
    VideoOutcome {
        input: InputSpec {
            path,
            stem: stem.to_string(),
        },
        result: Ok((set, eval)),
    }
}

fn failed(stem: &str) -> VideoOutcome {
    VideoOutcome {
        input: InputSpec {
            path: PathBuf::from(format!("{stem}.json")),
            stem: stem.to_string(),
        },
        result: Err(VideoError::Input(InputError::Empty {
            path: format!("{stem}.json"),
        })),
    }
}

#[test]
fn test_write_reports_both_formats() {
    let dir = make_temp_dir();
    let out = outcome("clip", vec![Detection::new("Weapons", 90.0)]);
    let written = write_reports(&out, &dir, ReportFormat::Both).unwrap();
    assert_eq!(
        written,
        vec![dir.join("clip.moderation.json"), dir.join("clip.report.txt")]
    );

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
    assert_eq!(json["verdict"], "rejected");
    assert_eq!(json["label_counts"]["Weapons"], 1);
    assert_eq!(json["taxonomy_row"]["weapons"], 1);
    assert_eq!(json["taxonomy_row"]["label"], "rejected");

    let text = fs::read_to_string(&written[1]).unwrap();
    assert!(text.contains("Verdict: rejected"));
}

#[test]
fn test_write_reports_single_format_and_failed_input() {
    let dir = make_temp_dir();
    let out = outcome("quiet", Vec::new());
    let written = write_reports(&out, &dir, ReportFormat::Text).unwrap();
    assert_eq!(written, vec![dir.join("quiet.report.txt")]);
    assert!(!dir.join("quiet.moderation.json").exists());

    let written = write_reports(&failed("broken"), &dir, ReportFormat::Both).unwrap();
    assert!(written.is_empty());
}

#[test]
fn test_write_batch_tsv() {
    let dir = make_temp_dir();
    let outcomes = vec![
        outcome("a", vec![Detection::new("Pills", 99.0), Detection::new("Hanging", 85.0)]),
        outcome("b", vec![Detection::new("Pills", 10.0)]),
        failed("c"),
    ];
    let path = write_batch_tsv(&outcomes, &dir).unwrap();
    assert_eq!(path, dir.join(BATCH_FILE));
    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "input\tverdict\tretained\tmatched");
    assert_eq!(lines[1], "a.json\trejected\t2\tHanging;Pills");
    assert_eq!(lines[2], "b.json\tallowed\t0\t");
    assert_eq!(lines[3], "c.json\terror\t0\t");
}

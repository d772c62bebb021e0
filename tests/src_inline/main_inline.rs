use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_contentmod_main_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn parse_run(args: &[&str]) -> RunArgs {
    let mut argv = vec!["kira-contentmod", "run"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Run(args) => args,
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_run_defaults() {
    let args = parse_run(&["--input", "a.json", "--out", "out"]);
    assert_eq!(args.inputs, vec![PathBuf::from("a.json")]);
    assert_eq!(args.out, PathBuf::from("out"));
    assert_eq!(args.min_confidence, 80.0);
    assert_eq!(args.format, ReportFormat::Both);
    assert!(args.policy.is_none());
    assert!(args.disallow.is_empty());
    assert!(!args.fail_on_reject);
}

#[test]
fn test_parse_run_multiple_inputs_and_options() {
    let args = parse_run(&[
        "-i",
        "a.json",
        "b.json.gz",
        "-o",
        "out",
        "--min-confidence",
        "50",
        "--disallow",
        "Violence",
        "--disallow",
        "Pills",
        "--format",
        "json",
        "--fail-on-reject",
    ]);
    assert_eq!(args.inputs.len(), 2);
    assert_eq!(args.min_confidence, 50.0);
    assert_eq!(args.disallow, vec!["Violence", "Pills"]);
    assert_eq!(args.format, ReportFormat::Json);
    assert!(args.fail_on_reject);
}

#[test]
fn test_parse_run_requires_input_and_out() {
    assert!(Cli::try_parse_from(["kira-contentmod", "run", "--out", "o"]).is_err());
    assert!(Cli::try_parse_from(["kira-contentmod", "run", "--input", "a.json"]).is_err());
    assert!(Cli::try_parse_from(["kira-contentmod", "scan"]).is_err());
}

#[test]
fn test_resolve_policy_default_is_builtin() {
    let args = parse_run(&["--input", "a.json", "--out", "out"]);
    assert_eq!(resolve_policy(&args).unwrap(), DisallowPolicy::builtin());
}

#[test]
fn test_resolve_policy_merges_file_and_flags() {
    let dir = make_temp_dir();
    let policy_path = dir.join("policy.json");
    fs::write(&policy_path, r#"{"disallowed_labels": ["Pills"]}"#).unwrap();
    let policy_arg = policy_path.display().to_string();
    let args = parse_run(&[
        "--input",
        "a.json",
        "--out",
        "out",
        "--policy",
        &policy_arg,
        "--disallow-category",
        "tobacco",
        "--disallow",
        "weapons",
    ]);
    let policy = resolve_policy(&args).unwrap();
    let names: Vec<&str> = policy.iter().collect();
    assert_eq!(names, vec!["Pills", "Smoking", "Tobacco", "Tobacco Products", "Weapons"]);
}

#[test]
fn test_resolve_policy_disallow_is_exact() {
    let args = parse_run(&["--input", "a.json", "--out", "out", "--disallow", "violence"]);
    let policy = resolve_policy(&args).unwrap();
    assert_eq!(policy.iter().collect::<Vec<_>>(), vec!["Violence"]);

    let args = parse_run(&[
        "--input",
        "a.json",
        "--out",
        "out",
        "--disallow-category",
        "Cartoons",
    ]);
    assert!(matches!(
        resolve_policy(&args),
        Err(AppError::Policy(PolicyError::UnknownCategory(_)))
    ));
}

#[test]
fn test_run_moderation_end_to_end() {
    let dir = make_temp_dir();
    let clean = dir.join("clean.json");
    fs::write(
        &clean,
        r#"{"JobStatus": "SUCCEEDED", "ModerationLabels": [
            {"Timestamp": 0, "ModerationLabel": {"Name": "Smoking", "Confidence": 55.0, "ParentName": "Tobacco"}}
        ]}"#,
    )
    .unwrap();
    let flagged = dir.join("flagged.json");
    fs::write(
        &flagged,
        r#"{"JobStatus": "SUCCEEDED", "ModerationLabels": [
            {"Timestamp": 0, "ModerationLabel": {"Name": "Weapons", "Confidence": 97.5, "ParentName": "Violence"}},
            {"Timestamp": 400, "ModerationLabel": {"Name": "Violence", "Confidence": 97.5, "ParentName": ""}}
        ]}"#,
    )
    .unwrap();
    let out = dir.join("out");
    let (clean_arg, flagged_arg, out_arg) = (
        clean.display().to_string(),
        flagged.display().to_string(),
        out.display().to_string(),
    );

    let args = parse_run(&["-i", &clean_arg, &flagged_arg, "-o", &out_arg]);
    assert_eq!(run_moderation(&args).unwrap(), ExitCode::SUCCESS);
    assert!(out.join("clean.moderation.json").exists());
    assert!(out.join("flagged.report.txt").exists());
    let batch = fs::read_to_string(out.join("batch.tsv")).unwrap();
    assert!(batch.contains("\tallowed\t0\t"));
    assert!(batch.contains("\trejected\t2\tViolence;Weapons"));

    let args = parse_run(&["-i", &flagged_arg, "-o", &out_arg, "--fail-on-reject"]);
    assert_eq!(
        run_moderation(&args).unwrap(),
        ExitCode::from(EXIT_REJECTED)
    );

    let missing = dir.join("missing.json").display().to_string();
    let args = parse_run(&["-i", &missing, "-o", &out_arg]);
    assert_eq!(
        run_moderation(&args).unwrap(),
        ExitCode::from(EXIT_INPUT_FAILED)
    );
}

#[test]
fn test_run_moderation_rejects_bad_threshold() {
    let args = parse_run(&["-i", "a.json", "-o", "out", "--min-confidence", "150"]);
    assert!(matches!(
        run_moderation(&args),
        Err(AppError::Eval(EvalError::InvalidThreshold(_)))
    ));
}

#[test]
fn test_run_moderation_rejects_repeated_stdin() {
    let args = parse_run(&["-i", "-", "-", "-o", "out"]);
    assert!(matches!(
        run_moderation(&args),
        Err(AppError::Input(InputError::DuplicateStdin))
    ));
}

#[test]
fn test_render_taxonomy() {
    let text = render_taxonomy(false).unwrap();
    assert!(text.starts_with("Explicit Nudity\n"));
    assert!(text.contains("  Weapon Violence\tweapon_violence\n"));

    let json: serde_json::Value = serde_json::from_str(&render_taxonomy(true).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 10);
    assert_eq!(json[2]["labels"][3]["id"], "weapons");
}

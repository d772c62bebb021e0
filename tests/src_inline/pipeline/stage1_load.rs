use std::path::PathBuf;

use super::*;

#[test]
fn test_plan_inputs_unique_stems() {
    let paths = vec![
        PathBuf::from("a/clip.json"),
        PathBuf::from("b/clip.json.gz"),
        PathBuf::from("trailer.json"),
        PathBuf::from("c/clip.json"),
        PathBuf::from("-"),
    ];
    let stems: Vec<String> = plan_inputs(&paths)
        .unwrap()
        .into_iter()
        .map(|i| i.stem)
        .collect();
    assert_eq!(stems, vec!["clip", "clip_2", "trailer", "clip_3", "stdin"]);
}

#[test]
fn test_plan_inputs_keeps_order_and_paths() {
    let paths = vec![PathBuf::from("z.json"), PathBuf::from("a.json")];
    let planned = plan_inputs(&paths).unwrap();
    assert_eq!(planned[0].path, PathBuf::from("z.json"));
    assert_eq!(planned[1].path, PathBuf::from("a.json"));
}

#[test]
fn test_plan_inputs_rejects_repeated_stdin() {
    let paths = vec![PathBuf::from("-"), PathBuf::from("a.json"), PathBuf::from("-")];
    assert!(matches!(
        plan_inputs(&paths),
        Err(InputError::DuplicateStdin)
    ));
}

#[test]
fn test_run_stage1_missing_file() {
    let path = std::env::temp_dir().join("kira_contentmod_missing_input_file.json");
    let err = run_stage1(&path).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
}

use super::*;

use std::path::Path;

use sift_fs::FileRecord;

fn base_args() -> ScanArgs {
    ScanArgs {
        root: None,
        name_terms: Vec::new(),
        skip_name_terms: Vec::new(),
        folder_terms: Vec::new(),
        ext_terms: Vec::new(),
        exclude_patterns: Vec::new(),
        dest: None,
        output: OutputOptions {
            json: false,
            color: "auto".to_string(),
            quiet: false,
        },
    }
}

fn record(path: &str) -> FileRecord {
    FileRecord::from_path(Path::new(path)).expect("record")
}

#[test]
fn no_flags_matches_every_record() {
    let spec = build_spec(&base_args());

    assert!(spec.is_satisfied(&record("/a/b.txt")));
    assert!(spec.is_satisfied(&record("/x/Makefile")));
}

#[test]
fn flag_groups_are_anded() {
    let mut args = base_args();
    args.name_terms = vec!["report".to_string()];
    args.ext_terms = vec!["img".to_string(), "jpg".to_string()];

    let spec = build_spec(&args);

    match &spec {
        SpecExpr::And(children) => assert_eq!(children.len(), 2),
        other => panic!("expected And at the root, got {:?}", other),
    }

    assert!(spec.is_satisfied(&record("/a/report.img")));
    assert!(!spec.is_satisfied(&record("/a/report.txt")));
    assert!(!spec.is_satisfied(&record("/a/notes.img")));
}

#[test]
fn skip_name_becomes_a_negated_primitive() {
    let mut args = base_args();
    args.name_terms = vec!["report".to_string()];
    args.skip_name_terms = vec!["draft".to_string()];

    let spec = build_spec(&args);

    let SpecExpr::And(children) = &spec else {
        panic!("expected And at the root");
    };
    assert!(matches!(children[1], SpecExpr::Not(_)));

    assert!(spec.is_satisfied(&record("/a/report_final.pdf")));
    assert!(!spec.is_satisfied(&record("/a/report_draft.pdf")));
}

#[test]
fn folder_flag_matches_any_segment() {
    let mut args = base_args();
    args.folder_terms = vec!["photos".to_string(), "camera".to_string()];

    let spec = build_spec(&args);

    assert!(spec.is_satisfied(&record("/backup/photos/x.jpg")));
    assert!(spec.is_satisfied(&record("/old_camera_roll/x.jpg")));
    assert!(!spec.is_satisfied(&record("/music/x.jpg")));
}

#[test]
fn flag_terms_match_case_insensitively() {
    let mut args = base_args();
    args.ext_terms = vec!["JPG".to_string()];

    let spec = build_spec(&args);

    assert!(spec.is_satisfied(&record("/a/pic.jpg")));
    assert!(spec.is_satisfied(&record("/a/pic.JPG")));
}

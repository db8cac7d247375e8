use super::*;

use std::cell::Cell;
use std::path::Path;

use crate::expr::{and_, ext, name, not_};

fn record(path: &str) -> FileRecord {
    FileRecord::from_path(Path::new(path)).expect("record")
}

#[test]
fn yields_matching_records_in_input_order() {
    let records = vec![
        record("/a/report.img"),
        record("/a/notes.txt"),
        record("/a/report2.JPG"),
        record("/a/todo.md"),
        record("/a/scan.jpg"),
    ];
    let spec = ext(["img", "jpg"]);

    let mut matches = Matches::new(records.into_iter(), &spec);

    let names: Vec<_> = matches.by_ref().map(|r| r.file_name).collect();
    assert_eq!(names, vec!["report.img", "report2.JPG", "scan.jpg"]);
    assert_eq!(matches.matched(), 3);
}

#[test]
fn five_records_two_matches() {
    let records = vec![
        record("/a/one.txt"),
        record("/a/two.img"),
        record("/a/three.txt"),
        record("/a/four.img"),
        record("/a/five.txt"),
    ];
    let spec = ext(["img"]);

    let mut matches = Matches::new(records.into_iter(), &spec);

    let got: Vec<_> = matches.by_ref().map(|r| r.file_name).collect();
    assert_eq!(got, vec!["two.img", "four.img"]);
    assert_eq!(matches.matched(), 2);
}

#[test]
fn empty_input_yields_nothing_and_zero_count() {
    let spec = name(["anything"]);
    let mut matches = Matches::new(std::iter::empty(), &spec);

    assert!(matches.next().is_none());
    assert_eq!(matches.matched(), 0);
}

#[test]
fn pulls_input_lazily() {
    let pulled = Cell::new(0usize);
    let records = vec![
        record("/a/hit.img"),
        record("/a/miss.txt"),
        record("/a/hit2.img"),
    ];
    let input = records.into_iter().inspect(|_| pulled.set(pulled.get() + 1));
    let spec = ext(["img"]);

    let mut matches = Matches::new(input, &spec);

    // First yield needs exactly one pull; the rest of the input is untouched.
    let first = matches.next().expect("first match");
    assert_eq!(first.file_name, "hit.img");
    assert_eq!(pulled.get(), 1);
}

#[test]
fn abandoned_stream_reports_partial_count_only() {
    let records = vec![
        record("/a/one.img"),
        record("/a/two.img"),
        record("/a/three.img"),
    ];
    let spec = ext(["img"]);

    let mut matches = Matches::new(records.into_iter(), &spec);
    let _first = matches.next();

    // The consumer walked away after one item; the counter reflects what
    // was yielded, not what the full pass would have found.
    assert_eq!(matches.matched(), 1);
}

#[test]
fn spec_tree_is_reusable_across_passes() {
    let spec = and_([name(["report"]), not_(ext(["txt"]))]);

    let pass = |paths: &[&str]| -> usize {
        let records: Vec<_> = paths.iter().map(|p| record(p)).collect();
        let mut matches = Matches::new(records.into_iter(), &spec);
        matches.by_ref().count();
        matches.matched()
    };

    assert_eq!(pass(&["/a/report.img", "/a/report.txt"]), 1);
    assert_eq!(pass(&["/b/report.jpg", "/b/report2.png", "/b/x.img"]), 2);
}

// tests/integration/csv_export.rs
use std::fs;

use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, author_sloc, two_file_workspace};

const HEADER: &str = "author, total, sloc, comment_lines, files";

#[test]
fn legacy_flag_writes_header_and_one_row_per_author() {
    let ws = two_file_workspace();
    author_sloc(ws.path())
        .args([".", "-csv", "out.csv"])
        .assert()
        .success();

    let csv = ws.read("out.csv");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some(HEADER));
    assert_eq!(lines.count(), 2);
    assert!(csv.ends_with('\n'));
}

#[cfg(unix)]
#[test]
fn rows_match_the_author_table() {
    let ws = two_file_workspace();
    author_sloc(ws.path())
        .args([".", "--csv=report.csv"])
        .assert()
        .success();
    assert_eq!(
        ws.read("report.csv"),
        "author, total, sloc, comment_lines, files\n\
         X, 18, 15, 3, \"['./A.java', './B.java']\"\n\
         Y, 6, 5, 1, \"['./B.java']\"\n"
    );
}

#[test]
fn empty_directory_writes_header_only() {
    let ws = TempWorkspace::new();
    fs::create_dir(ws.path().join("src")).unwrap();
    author_sloc(ws.path())
        .args(["src", "-csv=empty.csv"])
        .assert()
        .success();
    assert_eq!(ws.read("empty.csv"), format!("{HEADER}\n"));
}

#[test]
fn existing_file_is_overwritten() {
    let ws = two_file_workspace();
    ws.create_file("out.csv", "stale\nstale\nstale\nstale\n");
    author_sloc(ws.path())
        .args([".", "-csv", "out.csv"])
        .assert()
        .success();
    assert!(!ws.read("out.csv").contains("stale"));
}

#[test]
fn unwritable_target_fails_after_console_report() {
    let ws = two_file_workspace();
    author_sloc(ws.path())
        .args([".", "-csv", "no/such/dir/out.csv"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(" Author Summary "))
        .stderr(predicate::str::contains("Error").and(predicate::str::contains("out.csv")));
}

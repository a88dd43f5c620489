// tests/integration/end_to_end.rs
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{TWO_BLOCKS_JAVA, TempWorkspace, UNTAGGED_JAVA, author_sloc, two_file_workspace};

#[cfg(unix)]
const TWO_FILE_REPORT: &str = "\
============= File Summary =============
./A.java
 - total: 12
 - sloc: 10
 - comment_lines: 2
 - authors: ['X']
./B.java
 - total: 6
 - sloc: 5
 - comment_lines: 1
 - authors: ['X', 'Y']

============ Author Summary ============
X:
 - total: 18
 - sloc: 15
 - comment_lines: 3
 - files: ['./A.java', './B.java']
Y:
 - total: 6
 - sloc: 5
 - comment_lines: 1
 - files: ['./B.java']
";

#[cfg(unix)]
#[test]
fn two_file_report_matches_exactly() {
    let ws = two_file_workspace();
    author_sloc(ws.path())
        .arg(".")
        .assert()
        .success()
        .stdout(TWO_FILE_REPORT);
}

#[test]
fn root_defaults_to_current_directory() {
    let ws = two_file_workspace();
    author_sloc(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("X:\n - total: 18\n - sloc: 15\n - comment_lines: 3"));
}

#[test]
fn repeated_runs_print_identical_reports() {
    let ws = two_file_workspace();
    ws.create_file("nested/deeper/C.java", "/** @author Z */\nclass C {}\n");
    let first = author_sloc(ws.path()).output().unwrap();
    let second = author_sloc(ws.path()).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn untagged_file_gets_one_diagnostic_and_no_author_entry() {
    let ws = TempWorkspace::new();
    ws.create_file("Util.java", UNTAGGED_JAVA);

    let output = author_sloc(ws.path()).arg(".").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(stdout.matches("file contains no @author tag:").count(), 1);
    assert!(stdout.contains("Util.java\n - total: 3\n - sloc: 2\n - comment_lines: 1\n - authors: []"));
    let authors_section = stdout.split(" Author Summary ").nth(1).unwrap();
    assert!(!authors_section.contains("Util.java"));
}

#[test]
fn untagged_file_leaves_stderr_silent_by_default() {
    let ws = TempWorkspace::new();
    ws.create_file("U.java", "class U {}\n");
    ws.create_file("T.java", "/** @author A */\nclass T {}\n");

    author_sloc(ws.path())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("file contains no @author tag:").count(1))
        .stderr(predicate::str::is_empty());
}

#[test]
fn untagged_file_is_logged_with_verbose() {
    let ws = TempWorkspace::new();
    ws.create_file("U.java", "class U {}\n");

    author_sloc(ws.path())
        .args([".", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no @author tag"));
}

#[test]
fn diagnostic_precedes_the_report() {
    let ws = TempWorkspace::new();
    ws.create_file("Util.java", UNTAGGED_JAVA);
    let output = author_sloc(ws.path()).arg(".").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let diagnostic = stdout.find("file contains no @author tag:").unwrap();
    let banner = stdout.find(" File Summary ").unwrap();
    assert!(diagnostic < banner);
}

#[test]
fn only_first_doc_block_attributes() {
    let ws = TempWorkspace::new();
    ws.create_file("Two.java", TWO_BLOCKS_JAVA);
    author_sloc(ws.path())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("first:\n"))
        .stdout(predicate::str::contains("second").not());
}

#[test]
fn empty_directory_prints_only_banners() {
    let ws = TempWorkspace::new();
    author_sloc(ws.path())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^=+ File Summary =+\n\n=+ Author Summary =+\n$").unwrap());
}

#[test]
fn hidden_directories_are_scanned_by_default() {
    let ws = TempWorkspace::new();
    ws.create_file(".hidden/H.java", "/** @author H */\nclass H {}\n");

    author_sloc(ws.path())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("H:\n"));

    author_sloc(ws.path())
        .args([".", "--no-hidden"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H:\n").not());
}

#[test]
fn extension_and_exclude_filters() {
    let ws = two_file_workspace();
    ws.create_file("K.kt", "/** @author K */\nclass K\n");

    author_sloc(ws.path())
        .args([".", "--ext", "java,kt", "--exclude", "B.java"])
        .assert()
        .success()
        .stdout(predicate::str::contains("K:\n"))
        .stdout(predicate::str::contains("Y:").not());
}

#[test]
fn invalid_utf8_source_aborts() {
    let ws = TempWorkspace::new();
    ws.create_binary("Bad.java", b"/** @author \xff */\nclass Bad {}\n");
    author_sloc(ws.path())
        .arg(".")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bad.java"));
}

#[test]
fn missing_root_fails_before_scanning() {
    let ws = TempWorkspace::new();
    author_sloc(ws.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Root directory not found"));
}

#[test]
fn logs_go_to_stderr_only() {
    let ws = two_file_workspace();
    author_sloc(ws.path())
        .args([".", "-vv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("scan finished"))
        .stdout(predicate::str::contains("scan finished").not());
}

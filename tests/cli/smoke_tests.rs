use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_author-sloc"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("author-sloc"))
        .stdout(predicate::str::contains("--csv"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_author-sloc"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_flags() {
    Command::new(env!("CARGO_BIN_EXE_author-sloc"))
        .arg("--definitely-not-a-flag")
        .assert()
        .failure();
}

#[test]
fn rejects_malformed_extension() {
    Command::new(env!("CARGO_BIN_EXE_author-sloc"))
        .args(["--ext", "a/b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid extension"));
}

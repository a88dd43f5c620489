// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod fixtures;
pub mod temp;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use temp::TempWorkspace;

use assert_cmd::Command;

/// The built binary, run from `cwd`.
#[allow(dead_code)]
pub fn author_sloc(cwd: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_author-sloc"));
    cmd.current_dir(cwd);
    cmd
}

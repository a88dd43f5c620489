// src/logging.rs
//! stderr 向けのログ初期化

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// `-v` の回数からフィルタ指定を決める
#[must_use]
pub fn level_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Logs go to stderr only.
///
/// Returns `false` when a subscriber was already installed.
pub fn init(verbosity: u8) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level_directive(verbosity)))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .is_ok()
}

// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use author_sloc::args::{Args, normalize_legacy_flags};
use author_sloc::config::Config;
use author_sloc::{app, logging};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse_from(normalize_legacy_flags(std::env::args_os()));
    let config = Config::try_from(args)?;
    logging::init(config.verbosity);
    tracing::debug!(?config, version = author_sloc::VERSION, "configuration resolved");

    app::run(&config)?;
    Ok(())
}

//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Directory traversal and source file reading
//! - [`counting`]: Code/comment line counting for one file
//! - [`progress`]: Per-file notifications while a scan runs
//!
//! These ports allow the aggregation use case to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod counting;
pub mod filesystem;
pub mod progress;

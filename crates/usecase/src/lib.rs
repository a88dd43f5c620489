//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates the core extraction/statistics logic and the
//! port traits to implement the scan:
//!
//! - [`orchestrator`]: walks the plan, attributes every file, builds both tables
//!
//! Use cases depend on both core and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::{ScanPorts, SummarizeAuthors};

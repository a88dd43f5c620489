//! Command-line surface tests.

#[path = "cli/smoke_tests.rs"]
mod smoke_tests;

#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod authors;
pub mod language;
pub mod parser;
pub mod stats;

pub use authors::AuthorExtractor;
pub use parser::count_bytes;
pub use stats::{AuthorStatistics, AuthorSummary, FileStatistics, OrderedTable, SourceAnalysis};

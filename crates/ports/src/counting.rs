// crates/ports/src/counting.rs
use std::path::Path;

use author_sloc_shared_kernel::{Result, SourceCounts};

/// Port for counting code and comment lines of one file.
pub trait LineCounter: Send + Sync {
    fn count(&self, path: &Path) -> Result<SourceCounts>;
}

// crates/ports/src/progress.rs
use std::path::Path;

use author_sloc_shared_kernel::Result;

/// Receives notifications while files are scanned.
pub trait ScanObserver: Send + Sync {
    /// Called before `path` is read.
    fn on_file(&self, path: &Path) -> Result<()>;

    /// Called when `path` declares no author.
    fn on_missing_author(&self, path: &Path) -> Result<()>;
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ScanObserver for NullObserver {
    fn on_file(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn on_missing_author(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

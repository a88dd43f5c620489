// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use author_sloc_shared_kernel::Result;

/// Input parameters controlling file enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPlan {
    pub root: PathBuf,
    /// Extensions without the leading dot, matched exactly and case-sensitively.
    pub extensions: Vec<String>,
    /// Glob patterns; a file matching any of them is skipped.
    pub exclude_patterns: Vec<String>,
    pub include_hidden: bool,
    /// Descend into symlinked directories and read symlinked files.
    pub follow_links: bool,
}

impl ScanPlan {
    pub const DEFAULT_EXTENSION: &'static str = "java";

    /// `root` 配下の `.java` を対象とする既定プラン
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: vec![Self::DEFAULT_EXTENSION.to_string()],
            exclude_patterns: Vec::new(),
            include_hidden: true,
            follow_links: true,
        }
    }

    /// Whether `path` carries one of the planned extensions.
    #[must_use]
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|want| want == ext))
    }
}

/// Port for enumerating source files.
pub trait FileEnumerator: Send + Sync {
    /// Returns every matching regular file under the plan's root.
    fn collect(&self, plan: &ScanPlan) -> Result<Vec<PathBuf>>;
}

/// Port for reading a source file as text.
pub trait SourceReader: Send + Sync {
    /// Fails on unreadable files and on content that is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

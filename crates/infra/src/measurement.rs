// crates/infra/src/measurement.rs
//! ファイル単位の行数計測

use std::path::Path;

use author_sloc_core::count_bytes;
use author_sloc_ports::counting::LineCounter;
use author_sloc_shared_kernel::{InfrastructureError, Result, SourceCounts};
use tracing::debug;

use crate::persistence::FileReader;

/// Counts code/comment lines with the per-extension line classifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SourceLineCounter;

impl SourceLineCounter {
    pub fn new() -> Self {
        Self
    }
}

impl LineCounter for SourceLineCounter {
    fn count(&self, path: &Path) -> Result<SourceCounts> {
        let bytes = FileReader::read_to_end(path).map_err(|source| InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();

        let analysis = count_bytes(&bytes, extension);
        if analysis.is_binary {
            debug!(path = %path.display(), "binary content, counted as empty");
        }
        Ok(analysis.source_counts())
    }
}

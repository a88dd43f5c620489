use std::path::Path;

use author_sloc_core::{AuthorExtractor, AuthorSummary};
use author_sloc_ports::{
    counting::LineCounter,
    filesystem::{FileEnumerator, ScanPlan, SourceReader},
    progress::ScanObserver,
};
use author_sloc_shared_kernel::{ApplicationError, AuthorSlocError, ErrorContext, Result};
use tracing::{debug, info};

/// Adapters the scan is driven through.
#[derive(Clone, Copy)]
pub struct ScanPorts<'a> {
    pub enumerator: &'a dyn FileEnumerator,
    pub reader: &'a dyn SourceReader,
    pub counter: &'a dyn LineCounter,
    pub observer: &'a dyn ScanObserver,
}

/// Builds the File Table and Author Table for one directory tree.
pub struct SummarizeAuthors<'a> {
    ports: ScanPorts<'a>,
    extractor: AuthorExtractor,
}

impl<'a> SummarizeAuthors<'a> {
    pub fn new(ports: ScanPorts<'a>) -> Result<Self> {
        let extractor = AuthorExtractor::new()?;
        Ok(Self { ports, extractor })
    }

    /// Scans every planned file in enumeration order.
    ///
    /// The first failing file aborts the whole run.
    pub fn run(&self, plan: &ScanPlan) -> Result<AuthorSummary> {
        info!(root = %plan.root.display(), extensions = ?plan.extensions, "scan started");

        let paths = self.ports.enumerator.collect(plan).map_err(|source| {
            ApplicationError::FileCollectionFailed {
                root: plan.root.clone(),
                source: Some(Box::new(source)),
            }
        })?;

        let mut summary = AuthorSummary::new();
        for path in &paths {
            self.scan_file(path, &mut summary)
                .with_context(|| format!("while scanning '{}'", path.display()))?;
        }

        info!(
            files = summary.files.len(),
            authors = summary.authors.len(),
            sloc = %summary.total_code_lines(),
            comment_lines = %summary.total_comment_lines(),
            "scan finished"
        );
        Ok(summary)
    }

    fn scan_file(&self, path: &Path, summary: &mut AuthorSummary) -> Result<()> {
        self.ports.observer.on_file(path)?;

        let contents = self.ports.reader.read_to_string(path)?;
        let authors = self.extractor.extract(&contents);
        drop(contents);

        let counts = self.ports.counter.count(path).map_err(|source| {
            AuthorSlocError::from(ApplicationError::AnalysisFailed {
                path: path.to_path_buf(),
                reason: "line counting failed".to_string(),
                source: Some(Box::new(source)),
            })
        })?;
        debug!(
            path = %path.display(),
            sloc = %counts.code,
            comment_lines = %counts.comment,
            authors = ?authors,
            "file scanned"
        );

        let missing_author = authors.is_empty();
        summary.record_file(path, authors, counts);

        if missing_author {
            info!(path = %path.display(), "no @author tag");
            self.ports.observer.on_missing_author(path)?;
        }
        Ok(())
    }
}

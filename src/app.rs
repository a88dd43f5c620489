// src/app.rs
use std::io::{self, Write};

use author_sloc_core::AuthorSummary;
use author_sloc_infra::{FsSourceReader, SourceLineCounter, WalkFileEnumerator};
use author_sloc_shared_kernel::{PresentationError, Result};
use author_sloc_usecase::{ScanPorts, SummarizeAuthors};
use tracing::info;

use crate::config::Config;
use crate::{export, presentation};

/// Scan, print the console report, then write the author table if requested.
///
/// # Errors
///
/// Any scan, read, count or write failure aborts the run. The console report is
/// already on stdout when the table export fails.
pub fn run(config: &Config) -> Result<AuthorSummary> {
    let enumerator = WalkFileEnumerator::new();
    let reader = FsSourceReader::new();
    let counter = SourceLineCounter::new();
    let observer = presentation::ConsoleObserver;
    let ports = ScanPorts {
        enumerator: &enumerator,
        reader: &reader,
        counter: &counter,
        observer: &observer,
    };

    let summary = SummarizeAuthors::new(ports)?.run(&config.scan_plan())?;

    {
        let mut stdout = io::stdout().lock();
        presentation::write_report(&mut stdout, &summary, presentation::terminal_width())
            .and_then(|()| stdout.flush())
            .map_err(PresentationError::Output)?;
    }

    if let Some(path) = &config.csv_output {
        export::export_author_table(path, &summary.authors)?;
        info!(path = %path.display(), rows = summary.authors.len(), "author table written");
    }

    Ok(summary)
}

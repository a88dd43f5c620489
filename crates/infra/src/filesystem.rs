// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use author_sloc_ports::filesystem::{FileEnumerator, ScanPlan, SourceReader};
use author_sloc_shared_kernel::{InfrastructureError, Result};
use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;
use tracing::{trace, warn};

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `FileEnumerator` port based on the scan plan.
///
/// The walk is sequential and sorted by file name inside every directory, so the
/// returned order is stable across runs. Ignore files (`.gitignore`, `.ignore`)
/// are not consulted.
#[derive(Debug, Default)]
pub struct WalkFileEnumerator;

impl WalkFileEnumerator {
    pub fn new() -> Self {
        Self
    }

    pub fn enumerate(plan: &ScanPlan) -> Result<Vec<PathBuf>> {
        enumerate_plan(plan)
    }
}

impl FileEnumerator for WalkFileEnumerator {
    fn collect(&self, plan: &ScanPlan) -> Result<Vec<PathBuf>> {
        Self::enumerate(plan)
    }
}

fn enumerate_plan(plan: &ScanPlan) -> Result<Vec<PathBuf>> {
    if !plan.root.is_dir() {
        return Err(InfrastructureError::RootNotFound(plan.root.clone()).into());
    }
    let excludes = ExcludeMatcher::new(&plan.exclude_patterns)?;

    let mut builder = WalkBuilder::new(&plan.root);
    builder
        .follow_links(plan.follow_links)
        .hidden(!plan.include_hidden)
        .parents(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    if !excludes.is_empty() {
        let root = plan.root.clone();
        builder.filter_entry(move |entry| {
            let skip = entry.depth() > 0 && excludes.is_excluded(&root, entry.path());
            if skip {
                trace!(path = %entry.path().display(), "excluded by pattern");
            }
            !skip
        });
    }

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            // 循環リンク・切れたリンクはその枝だけ打ち切る
            Err(err) if plan.follow_links && is_unfollowable_link(&err) => {
                warn!(error = %err, "symlink skipped");
                continue;
            }
            Err(err) => {
                return Err(InfrastructureError::Walk {
                    root: plan.root.clone(),
                    details: err.to_string(),
                }
                .into());
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.into_path();
        if plan.accepts_extension(&path) {
            trace!(path = %path.display(), "source file");
            files.push(path);
        }
    }

    Ok(files)
}

fn is_unfollowable_link(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::Io(io) => io.kind() == std::io::ErrorKind::NotFound,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_unfollowable_link(err),
        _ => false,
    }
}

/// Compiled `--exclude` globs.
///
/// Patterns containing `/` or `**` match the path relative to the root,
/// others match the bare file or directory name.
#[derive(Debug, Clone, Default)]
struct ExcludeMatcher {
    patterns: Vec<(bool, GlobMatcher)>,
}

impl ExcludeMatcher {
    fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                #[cfg(windows)]
                let pattern = &pattern.replace('\\', "/");
                let looks_like_path = pattern.contains('/') || pattern.contains("**");
                Glob::new(pattern)
                    .map(|glob| (looks_like_path, glob.compile_matcher()))
                    .map_err(|err| InfrastructureError::InvalidPattern {
                        pattern: pattern.to_string(),
                        details: err.to_string(),
                    })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn is_excluded(&self, root: &Path, path: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        let name = path.file_name();
        self.patterns.iter().any(|(looks_like_path, matcher)| {
            if *looks_like_path {
                matcher.is_match(relative)
            } else {
                name.is_some_and(|n| matcher.is_match(n))
            }
        })
    }
}

/// Reads source files as strict UTF-8 text.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSourceReader;

impl FsSourceReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for FsSourceReader {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        FileReader::read_to_string(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source }.into())
    }
}

// crates/core/src/stats.rs
//! 集計結果のデータモデル
//!
//! ファイル単位・著者単位の統計と、挿入順を保持するテーブル。

use std::{borrow::Borrow, hash::Hash, path::{Path, PathBuf}};

use author_sloc_shared_kernel::{LineCount, SourceCounts};
use hashbrown::HashMap;

use crate::language::LineTally;

/// Pure analysis result for one buffer, independent of file system metadata.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SourceAnalysis {
    /// Per-kind line totals.
    pub tally: LineTally,
    /// Whether the content was detected as binary.
    pub is_binary: bool,
}

impl SourceAnalysis {
    #[must_use]
    pub fn source_counts(&self) -> SourceCounts {
        SourceCounts {
            code: self.tally.code,
            comment: self.tally.comment,
        }
    }
}

/// ファイル単位の統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileStatistics {
    /// Normalized names in declaration order, possibly empty.
    pub authors: Vec<String>,
    pub code_line_count: LineCount,
    pub comment_line_count: LineCount,
}

impl FileStatistics {
    #[must_use]
    pub fn new(authors: Vec<String>, counts: SourceCounts) -> Self {
        Self {
            authors,
            code_line_count: counts.code,
            comment_line_count: counts.comment,
        }
    }

    #[must_use]
    pub fn total(&self) -> LineCount {
        self.code_line_count + self.comment_line_count
    }
}

/// 著者単位の統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuthorStatistics {
    pub code_line_count: LineCount,
    pub comment_line_count: LineCount,
    /// One entry per attribution, in scan order.
    pub files: Vec<PathBuf>,
}

impl AuthorStatistics {
    /// Adds the full counts of `path` to this author.
    pub fn credit(&mut self, path: &Path, counts: SourceCounts) {
        self.code_line_count += counts.code;
        self.comment_line_count += counts.comment;
        self.files.push(path.to_path_buf());
    }

    #[must_use]
    pub fn total(&self) -> LineCount {
        self.code_line_count + self.comment_line_count
    }
}

/// Map that iterates in first-insertion order.
///
/// Replacing the value of an existing key keeps its original position.
#[derive(Debug, Clone)]
pub struct OrderedTable<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for OrderedTable<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> OrderedTable<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces, returning the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&slot) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Returns the value for `key`, appending `default()` first if absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, default()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

pub type FileTable = OrderedTable<PathBuf, FileStatistics>;
pub type AuthorTable = OrderedTable<String, AuthorStatistics>;

/// File Table と Author Table の組
#[derive(Debug, Default, Clone)]
pub struct AuthorSummary {
    pub files: FileTable,
    pub authors: AuthorTable,
}

impl AuthorSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one scanned file and credits every listed author with its full counts.
    ///
    /// A name listed twice is credited twice.
    pub fn record_file(&mut self, path: &Path, authors: Vec<String>, counts: SourceCounts) {
        for author in &authors {
            self.authors
                .get_or_insert_with(author.clone(), AuthorStatistics::default)
                .credit(path, counts);
        }
        self.files
            .insert(path.to_path_buf(), FileStatistics::new(authors, counts));
    }

    /// Sum of code lines over every scanned file.
    #[must_use]
    pub fn total_code_lines(&self) -> LineCount {
        self.files.values().map(|f| f.code_line_count).sum()
    }

    #[must_use]
    pub fn total_comment_lines(&self) -> LineCount {
        self.files.values().map(|f| f.comment_line_count).sum()
    }
}

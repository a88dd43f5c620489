// crates/core/src/authors.rs
//! `@author` タグの抽出
//!
//! Only the first `/** ... */` block that contains `@author ` is used. The text
//! after the tag up to the end of its line becomes the raw author list.

use author_sloc_shared_kernel::{DomainError, DomainResult};
use regex::Regex;

/// `/**`, any run that never crosses `*/`, the tag, the captured list, then the
/// rest of the block up to `*/`.
const AUTHOR_TAG_PATTERN: &str = r"/\*\*(?:[^*]|\*[^/])*@author ([^\n]*)(?:[^*]|\*[^/])*\*/";

/// Literal two-backslash-plus-`n` sequence some generators leave in doc comments.
const ESCAPED_NEWLINE: &str = "\\\\n";

/// Extracts declared author names from source text.
#[derive(Debug, Clone)]
pub struct AuthorExtractor {
    pattern: Regex,
}

impl AuthorExtractor {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAuthorPattern`] if the tag pattern fails to compile.
    pub fn new() -> DomainResult<Self> {
        let pattern = Regex::new(AUTHOR_TAG_PATTERN).map_err(|err| {
            DomainError::InvalidAuthorPattern {
                details: err.to_string(),
            }
        })?;
        Ok(Self { pattern })
    }

    /// Returns the authors of the first tagged doc block, or an empty list.
    ///
    /// Tokens are not validated; `"@author a,"` yields `["a", ""]`.
    #[must_use]
    pub fn extract(&self, contents: &str) -> Vec<String> {
        self.raw_author_list(contents)
            .map(normalize_author_list)
            .unwrap_or_default()
    }

    /// The captured text after `@author ` with no normalization applied.
    #[must_use]
    pub fn raw_author_list<'a>(&self, contents: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(contents)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Strips whitespace and escaped newlines, then splits on commas.
#[must_use]
pub fn normalize_author_list(raw: &str) -> Vec<String> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .replace(ESCAPED_NEWLINE, "")
        .split(',')
        .map(str::to_owned)
        .collect()
}

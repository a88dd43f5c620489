// crates/core/src/language/processors/c_style.rs
//! # C-Style Comment Processor
//!
//! Line classifier for C-family languages with `//` and `/* */` comments.
//!
//! ## Supported Languages
//!
//! - Java, Kotlin, Scala, Groovy
//! - C, C++, C#
//! - Go, JavaScript, TypeScript, Swift, Dart, PHP
//!
//! ## Classification
//!
//! | Line | Kind |
//! |------|------|
//! | `int x = 1; // note` | Code |
//! | ` * @author alice` (inside `/** */`) | Comment |
//! | `"literal",` | String |
//! | `}` | Blank |
//!
//! ## Usage Example
//!
//! ```rust
//! use author_sloc_core::language::processors::CStyleProcessor;
//! use author_sloc_core::language::processor_trait::{LineKind, LineProcessor};
//! use author_sloc_core::language::string_utils::StringSkipOptions;
//!
//! let mut proc = CStyleProcessor::new(StringSkipOptions::java_kotlin());
//!
//! assert_eq!(proc.classify_line("int x = 1;"), LineKind::Code);
//! assert_eq!(proc.classify_line("// this is a comment"), LineKind::Comment);
//! assert_eq!(proc.classify_line("int y = 2; // inline"), LineKind::Code);
//! ```

use super::super::processor_trait::{LineKind, LineParts, LineProcessor};
use super::super::string_utils::{
    FragmentKind, StringSkipOptions, classify_fragment, find_outside_string_with_options,
    find_text_block_end, find_unclosed_text_block,
};

/// C系言語プロセッサ (//, /* */) - ネスト非対応
#[derive(Debug, Default)]
pub struct CStyleProcessor {
    options: StringSkipOptions,
    in_block_comment: bool,
    /// 複数行 Text Block (`"""`) の内側
    in_text_block: bool,
}

impl LineProcessor for CStyleProcessor {
    fn classify_line(&mut self, line: &str) -> LineKind {
        self.process(line)
    }

    fn is_in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    fn reset(&mut self) {
        self.in_block_comment = false;
        self.in_text_block = false;
    }
}

impl CStyleProcessor {
    #[must_use]
    pub const fn new(options: StringSkipOptions) -> Self {
        Self {
            options,
            in_block_comment: false,
            in_text_block: false,
        }
    }

    pub fn process(&mut self, line: &str) -> LineKind {
        if line.trim().is_empty() {
            return LineKind::Blank;
        }

        let mut parts = LineParts::default();
        let mut rest = line;

        loop {
            if self.in_text_block {
                parts.add_fragment(FragmentKind::StringOnly);
                match find_text_block_end(rest.as_bytes()) {
                    Some(end) => {
                        self.in_text_block = false;
                        rest = &rest[end..];
                    }
                    None => break,
                }
                continue;
            }

            if self.in_block_comment {
                parts.comment = true;
                match rest.find("*/") {
                    Some(end) => {
                        self.in_block_comment = false;
                        rest = &rest[end + 2..];
                    }
                    None => break,
                }
                continue;
            }

            let line_comment = find_outside_string_with_options(rest, "//", self.options);
            let block_start = find_outside_string_with_options(rest, "/*", self.options);

            match (line_comment, block_start) {
                (Some(lc), Some(bs)) if bs < lc => {
                    parts.add_fragment(classify_fragment(&rest[..bs], self.options));
                    self.in_block_comment = true;
                    rest = &rest[bs + 2..];
                }
                (Some(lc), _) => {
                    parts.add_fragment(classify_fragment(&rest[..lc], self.options));
                    parts.comment = true;
                    break;
                }
                (None, Some(bs)) => {
                    parts.add_fragment(classify_fragment(&rest[..bs], self.options));
                    self.in_block_comment = true;
                    rest = &rest[bs + 2..];
                }
                (None, None) => {
                    if let Some(open) = find_unclosed_text_block(rest, self.options) {
                        parts.add_fragment(classify_fragment(&rest[..open], self.options));
                        parts.add_fragment(FragmentKind::StringOnly);
                        self.in_text_block = true;
                    } else {
                        parts.add_fragment(classify_fragment(rest, self.options));
                    }
                    break;
                }
            }
        }

        parts.kind()
    }
}

// crates/core/src/language/processors/simple_hash_style.rs
//! シンプルな Hash スタイル (#) のコメント処理
//!
//! 対象: Shell, Python, Ruby, YAML, TOML など

use super::super::processor_trait::{LineKind, LineParts, LineProcessor};
use super::super::string_utils::{
    StringSkipOptions, classify_fragment, find_outside_string_with_options,
};

/// 単純な Hash コメントプロセッサ
#[derive(Debug, Default)]
pub struct SimpleHashProcessor {
    options: StringSkipOptions,
    line_count: usize,
}

impl LineProcessor for SimpleHashProcessor {
    fn classify_line(&mut self, line: &str) -> LineKind {
        self.process(line)
    }

    fn reset(&mut self) {
        self.line_count = 0;
    }
}

impl SimpleHashProcessor {
    #[must_use]
    pub const fn new(options: StringSkipOptions) -> Self {
        Self {
            options,
            line_count: 0,
        }
    }

    pub fn process(&mut self, line: &str) -> LineKind {
        let first_line = self.line_count == 0;
        self.line_count += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        // shebang 行 (最初の行のみ)
        if first_line && trimmed.starts_with("#!") {
            return LineKind::Comment;
        }

        let mut parts = LineParts::default();
        match find_outside_string_with_options(line, "#", self.options) {
            Some(pos) => {
                parts.add_fragment(classify_fragment(&line[..pos], self.options));
                parts.comment = true;
            }
            None => parts.add_fragment(classify_fragment(line, self.options)),
        }
        parts.kind()
    }
}

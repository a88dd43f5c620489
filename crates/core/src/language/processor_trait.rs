// crates/core/src/language/processor_trait.rs
//! 行分類トレイト
//!
//! 各言語のコメント処理プロセッサに共通のインターフェースを提供します。
//!
//! # Example
//!
//! ```rust
//! use author_sloc_core::language::{LineKind, LineProcessor};
//!
//! struct SlashProcessor;
//!
//! impl LineProcessor for SlashProcessor {
//!     fn classify_line(&mut self, line: &str) -> LineKind {
//!         match line.trim() {
//!             "" => LineKind::Blank,
//!             t if t.starts_with("//") => LineKind::Comment,
//!             _ => LineKind::Code,
//!         }
//!     }
//! }
//!
//! let tally = SlashProcessor.tally("// doc\nlet x = 1;\n\n");
//! assert_eq!(tally.code, 1usize);
//! assert_eq!(tally.comment, 1usize);
//! assert_eq!(tally.blank, 1usize);
//! ```

use author_sloc_shared_kernel::LineCount;

/// 行の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// 空行、または `}` などの区切り記号だけの行
    Blank,
    /// コードを含む行（コメントが同居していてもコード扱い）
    Code,
    /// コメントのみの行
    Comment,
    /// 文字列リテラルのみの行
    String,
}

/// Per-kind line totals for one source text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineTally {
    pub code: LineCount,
    pub comment: LineCount,
    pub string: LineCount,
    pub blank: LineCount,
}

impl LineTally {
    pub fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Blank => self.blank.bump(),
            LineKind::Code => self.code.bump(),
            LineKind::Comment => self.comment.bump(),
            LineKind::String => self.string.bump(),
        }
    }

    /// Total physical lines seen.
    #[must_use]
    pub fn lines(&self) -> LineCount {
        self.code + self.comment + self.string + self.blank
    }
}

/// 行分類トレイト
///
/// 各言語プロセッサはこのトレイトを実装することで、
/// 統一されたインターフェースを通じて行の分類を行います。
pub trait LineProcessor: Send {
    /// 行を処理し、その分類を返す
    ///
    /// `line` は改行を含まない。ブロックコメントなど複数行にまたがる状態は
    /// プロセッサ内部で保持する。
    fn classify_line(&mut self, line: &str) -> LineKind;

    /// Classifies every line of `text` and returns the totals.
    fn tally(&mut self, text: &str) -> LineTally {
        let mut tally = LineTally::default();
        for line in text.lines() {
            tally.record(self.classify_line(line));
        }
        tally
    }

    /// 処理状態をリセット
    ///
    /// 新しいファイルの処理を開始する前に呼び出します。
    fn reset(&mut self) {}

    /// 現在ブロックコメント内かどうかを返す（デバッグ用）
    fn is_in_block_comment(&self) -> bool {
        false
    }
}

impl LineProcessor for Box<dyn LineProcessor> {
    fn classify_line(&mut self, line: &str) -> LineKind {
        (**self).classify_line(line)
    }

    fn tally(&mut self, text: &str) -> LineTally {
        (**self).tally(text)
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn is_in_block_comment(&self) -> bool {
        (**self).is_in_block_comment()
    }
}

/// Accumulates the parts found on one line and decides its [`LineKind`].
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LineParts {
    pub code: bool,
    pub comment: bool,
    pub string: bool,
}

impl LineParts {
    pub(crate) fn add_fragment(&mut self, kind: super::string_utils::FragmentKind) {
        use super::string_utils::FragmentKind;
        match kind {
            FragmentKind::Code => self.code = true,
            FragmentKind::StringOnly => self.string = true,
            FragmentKind::White => {}
        }
    }

    pub(crate) const fn kind(self) -> LineKind {
        if self.code {
            LineKind::Code
        } else if self.comment {
            LineKind::Comment
        } else if self.string {
            LineKind::String
        } else {
            LineKind::Blank
        }
    }
}

// crates/core/src/language/mod.rs
pub mod comment_style;
pub mod processor_trait;
pub mod processors;
pub mod string_utils;

use comment_style::CommentStyle;
pub use processor_trait::{LineKind, LineProcessor, LineTally};
use processors::{CStyleProcessor, SimpleHashProcessor};
use string_utils::{FragmentKind, StringSkipOptions, classify_fragment};

fn new_box<T: LineProcessor + 'static>(p: T) -> Box<dyn LineProcessor> {
    Box::new(p)
}

/// 拡張子に応じたプロセッサを生成する
#[must_use]
pub fn get_processor(extension: &str) -> Box<dyn LineProcessor> {
    let string_opts = StringSkipOptions::from_extension(extension);

    match CommentStyle::from_extension(extension) {
        CommentStyle::CStyle => new_box(CStyleProcessor::new(string_opts)),
        CommentStyle::SimpleHash => new_box(SimpleHashProcessor::new(string_opts)),
        CommentStyle::None => new_box(NoCommentProcessor),
    }
}

/// コメントなしのプロセッサ
struct NoCommentProcessor;

impl LineProcessor for NoCommentProcessor {
    fn classify_line(&mut self, line: &str) -> LineKind {
        match classify_fragment(line, StringSkipOptions::default()) {
            FragmentKind::Code => LineKind::Code,
            FragmentKind::White | FragmentKind::StringOnly => LineKind::Blank,
        }
    }
}

// crates/core/src/language/string_utils.rs
//! 文字列リテラル検出ユーティリティ
//!
//! 文字列リテラル内のコメントマーカーを無視し、行の「コード部分」が
//! 実際のコードなのか、文字列だけなのか、区切り記号だけなのかを判定する。

use std::borrow::Cow;

/// Characters that never make a line count as code on their own.
pub const WHITE_CHARACTERS: &[u8] = b"(),:;[]{}";

/// Convert a byte slice to a String, replacing invalid UTF-8 with `REPLACEMENT_CHARACTER`.
#[must_use]
pub fn from_utf8_lossy(input: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(input)
}

/// 文字列リテラルスキップオプション
///
/// 言語ごとに有効な文字列構文を指定することで、
/// 他の言語の構文による誤検出を防ぐ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringSkipOptions {
    flags: u8,
}

impl StringSkipOptions {
    const TEXT_BLOCK: u8 = 1 << 0;
    const BACKTICK_STRING: u8 = 1 << 1;
    const DOUBLE_QUOTE: u8 = 1 << 2;
    const SINGLE_QUOTE: u8 = 1 << 3;

    #[must_use]
    pub const fn text_block(self) -> bool {
        self.flags & Self::TEXT_BLOCK != 0
    }
    #[must_use]
    pub const fn backtick_string(self) -> bool {
        self.flags & Self::BACKTICK_STRING != 0
    }
    #[must_use]
    pub const fn double_quote(self) -> bool {
        self.flags & Self::DOUBLE_QUOTE != 0
    }
    #[must_use]
    pub const fn single_quote(self) -> bool {
        self.flags & Self::SINGLE_QUOTE != 0
    }

    #[must_use]
    pub const fn with_flag(mut self, flag: u8) -> Self {
        self.flags |= flag;
        self
    }

    /// 基本的な C スタイル (多くの言語で共通)
    #[must_use]
    pub const fn basic() -> Self {
        Self { flags: 0 }
            .with_flag(Self::DOUBLE_QUOTE)
            .with_flag(Self::SINGLE_QUOTE)
    }

    /// Java/Kotlin/Scala 用オプション (Text Block """...""" 対応)
    #[must_use]
    pub const fn java_kotlin() -> Self {
        Self::basic().with_flag(Self::TEXT_BLOCK)
    }

    /// Go/JavaScript 用オプション (バッククォート `...` 対応)
    #[must_use]
    pub const fn backtick() -> Self {
        Self::basic().with_flag(Self::BACKTICK_STRING)
    }

    /// 拡張子から適切なオプションを取得
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "java" | "kt" | "kts" | "scala" | "sc" | "groovy" | "gradle" | "dart" | "py" => {
                Self::java_kotlin()
            }
            "go" | "js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx" | "sh" | "bash" => Self::backtick(),
            _ => Self::basic(),
        }
    }
}

/// Java/Kotlin Text Block (三重クォート) をスキップ
/// 形式: """..."""
#[must_use]
pub fn try_skip_text_block(bytes: &[u8]) -> Option<usize> {
    if bytes.len() < 3 || bytes[0] != b'"' || bytes[1] != b'"' || bytes[2] != b'"' {
        return None;
    }

    // 行末まで閉じられていない場合は行末までが文字列
    Some(find_text_block_end(&bytes[3..]).map_or(bytes.len(), |end| end + 3))
}

/// Text Block の本文から閉じ `"""` を探し、その直後の位置を返す
#[must_use]
pub fn find_text_block_end(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 1 < bytes.len() {
            i += 2;
            continue;
        }
        if bytes[i..].starts_with(b"\"\"\"") {
            return Some(i + 3);
        }
        i += 1;
    }
    None
}

/// Offset of a `"""` text block that opens on this line and stays open past its end.
///
/// Ordinary string literals and text blocks closed on the same line are skipped.
#[must_use]
pub fn find_unclosed_text_block(line: &str, options: StringSkipOptions) -> Option<usize> {
    if !options.text_block() {
        return None;
    }
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i..].starts_with(b"\"\"\"") {
            match find_text_block_end(&bytes[i + 3..]) {
                Some(end) => {
                    i += 3 + end;
                    continue;
                }
                None => return Some(i),
            }
        }
        if let Some(skip) = try_skip_quoted_string(bytes, i, options) {
            i += skip;
            continue;
        }
        i += 1;
    }
    None
}

fn skip_delimited(bytes: &[u8], quote: u8) -> usize {
    let mut j = 1;
    while j < bytes.len() {
        if bytes[j] == b'\\' && j + 1 < bytes.len() {
            j += 2;
            continue;
        }
        if bytes[j] == quote {
            return j + 1;
        }
        j += 1;
    }
    bytes.len()
}

/// Returns the byte length of the string literal starting at `line[i]`, if one starts there.
fn try_skip_quoted_string(line: &[u8], i: usize, options: StringSkipOptions) -> Option<usize> {
    let bytes = &line[i..];
    let b = *bytes.first()?;

    if options.text_block() && b == b'"' {
        if let Some(skip) = try_skip_text_block(bytes) {
            return Some(skip);
        }
    }

    match b {
        b'"' if options.double_quote() => Some(skip_delimited(bytes, b'"')),
        b'\'' if options.single_quote() => Some(skip_delimited(bytes, b'\'')),
        b'`' if options.backtick_string() => Some(skip_delimited(bytes, b'`')),
        _ => None,
    }
}

/// 文字列リテラル外でパターンを検索
///
/// 指定されたオプションに基づいて、言語固有の文字列構文をスキップする。
#[must_use]
pub fn find_outside_string_with_options(
    line: &str,
    pattern: &str,
    options: StringSkipOptions,
) -> Option<usize> {
    let pattern_bytes = pattern.as_bytes();
    let line_bytes = line.as_bytes();

    if pattern_bytes.is_empty() || line_bytes.len() < pattern_bytes.len() {
        return None;
    }

    let mut i = 0;
    while i + pattern_bytes.len() <= line_bytes.len() {
        if let Some(skip) = try_skip_quoted_string(line_bytes, i, options) {
            i += skip;
            continue;
        }

        if &line_bytes[i..i + pattern_bytes.len()] == pattern_bytes {
            return Some(i);
        }

        i += 1;
    }

    None
}

/// What a comment-free piece of a line contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Only whitespace and white characters such as `}` or `);`.
    White,
    /// String literals and white characters, nothing else.
    StringOnly,
    /// Anything else.
    Code,
}

/// Classifies a fragment that is known to contain no comment.
#[must_use]
pub fn classify_fragment(fragment: &str, options: StringSkipOptions) -> FragmentKind {
    let bytes = fragment.as_bytes();
    let mut has_string = false;
    let mut i = 0;

    while i < bytes.len() {
        if let Some(skip) = try_skip_quoted_string(bytes, i, options) {
            has_string = true;
            i += skip;
            continue;
        }

        let b = bytes[i];
        if !b.is_ascii_whitespace() && !WHITE_CHARACTERS.contains(&b) {
            return FragmentKind::Code;
        }
        i += 1;
    }

    if has_string { FragmentKind::StringOnly } else { FragmentKind::White }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_marker_outside_string() {
        let opts = StringSkipOptions::basic();
        assert_eq!(find_outside_string_with_options("x = 1; // c", "//", opts), Some(7));
        assert_eq!(find_outside_string_with_options("s = \"// no\";", "//", opts), None);
        assert_eq!(find_outside_string_with_options("c = '\\'' /* x */", "/*", opts), Some(9));
    }

    #[test]
    fn text_block_hides_markers() {
        let opts = StringSkipOptions::java_kotlin();
        assert_eq!(find_outside_string_with_options("s = \"\"\"/* x */\"\"\";", "/*", opts), None);
    }

    #[test]
    fn unclosed_text_block_is_located() {
        let opts = StringSkipOptions::java_kotlin();
        assert_eq!(find_unclosed_text_block("String q = \"\"\"", opts), Some(11));
        assert_eq!(find_unclosed_text_block("s = \"\"\"x\"\"\" + \"\"\"", opts), Some(14));
        assert_eq!(find_unclosed_text_block("s = \"\"\"x\"\"\";", opts), None);
        assert_eq!(find_unclosed_text_block("s = \"a\";", opts), None);
        assert_eq!(find_unclosed_text_block("s = \"\"\"", StringSkipOptions::basic()), None);
    }

    #[test]
    fn text_block_end_honours_escapes() {
        assert_eq!(find_text_block_end(b"body \"\"\";"), Some(8));
        assert_eq!(find_text_block_end(b"\\\"\"\" still open"), None);
        assert_eq!(find_text_block_end(b""), None);
    }

    #[test]
    fn backtick_only_when_enabled() {
        assert_eq!(
            find_outside_string_with_options("`//`", "//", StringSkipOptions::backtick()),
            None
        );
        assert_eq!(
            find_outside_string_with_options("`//`", "//", StringSkipOptions::basic()),
            Some(1)
        );
    }

    #[test]
    fn classifies_fragments() {
        let opts = StringSkipOptions::java_kotlin();
        assert_eq!(classify_fragment("  });", opts), FragmentKind::White);
        assert_eq!(classify_fragment("   ", opts), FragmentKind::White);
        assert_eq!(classify_fragment("\"text\",", opts), FragmentKind::StringOnly);
        assert_eq!(classify_fragment("\"a\" + \"b\"", opts), FragmentKind::Code);
        assert_eq!(classify_fragment("return 1;", opts), FragmentKind::Code);
    }

    #[test]
    fn unterminated_string_runs_to_end_of_line() {
        let opts = StringSkipOptions::basic();
        assert_eq!(classify_fragment("\"open // still string", opts), FragmentKind::StringOnly);
    }
}

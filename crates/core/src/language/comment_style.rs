// crates/core/src/language/comment_style.rs
//! コメント構文の種類定義

/// コメント構文の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// C系言語: // と /* */
    CStyle,
    /// 単純な Hash スタイル (#) - Shell, Python, YAML, Config系等
    SimpleHash,
    /// コメント構文なし（全ての非空行をコードとして扱う）
    None,
}

impl CommentStyle {
    /// 拡張子から言語のコメントスタイルを判定
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "java" | "c" | "h" | "cpp" | "cc" | "cxx" | "hpp" | "hh" | "cs" | "js" | "mjs"
            | "cjs" | "jsx" | "ts" | "tsx" | "go" | "kt" | "kts" | "scala" | "sc" | "groovy"
            | "gradle" | "swift" | "dart" | "css" | "php" => Self::CStyle,

            "sh" | "bash" | "zsh" | "py" | "pyw" | "rb" | "pl" | "pm" | "yaml" | "yml"
            | "toml" | "r" => Self::SimpleHash,

            _ => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_extensions() {
        assert_eq!(CommentStyle::from_extension("java"), CommentStyle::CStyle);
        assert_eq!(CommentStyle::from_extension("JAVA"), CommentStyle::CStyle);
        assert_eq!(CommentStyle::from_extension("py"), CommentStyle::SimpleHash);
        assert_eq!(CommentStyle::from_extension("txt"), CommentStyle::None);
        assert_eq!(CommentStyle::from_extension(""), CommentStyle::None);
    }
}

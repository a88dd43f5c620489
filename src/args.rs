// src/args.rs
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "author-sloc",
    version,
    about = "@author タグ単位のソース行数集計ツール"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    /// ログ詳細度 (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,

    /// 走査するルートディレクトリ
    #[arg(
        value_hint = ValueHint::DirPath,
        default_value = ".",
        help_heading = "走査/入力"
    )]
    pub root_directory: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 著者テーブルの書き出し先 (`-csv` も可)
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath, help_heading = "出力")]
    pub csv: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// 対象拡張子（複数可, 既定: java）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub ext: Vec<String>,

    /// 除外する glob パターン（複数可）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub exclude: Vec<String>,

    /// 隠しファイル/ディレクトリを除外
    #[arg(long, help_heading = "走査/入力")]
    pub no_hidden: bool,

    /// シンボリックリンクを辿らない
    #[arg(long, help_heading = "走査/入力")]
    pub no_follow: bool,
}

/// Rewrites the single-dash `-csv` spelling to `--csv` so clap does not read it
/// as a cluster of short flags.
///
/// Arguments after a bare `--` are passed through untouched.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || passthrough {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    None
                }
                Some("-csv") => Some(OsString::from("--csv")),
                Some(s) if s.starts_with("-csv=") => Some(OsString::from(format!("-{s}"))),
                _ => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

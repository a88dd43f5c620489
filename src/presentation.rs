// src/presentation.rs
//! コンソールレポート
//!
//! File Summary と Author Summary を標準出力向けに整形する。

use std::io::{self, Write};
use std::path::Path;

use author_sloc_core::AuthorSummary;
use author_sloc_ports::progress::ScanObserver;
use author_sloc_shared_kernel::{PresentationError, Result};
use terminal_size::{Width, terminal_size_of};

/// Banner width when stdout is not a terminal.
pub const FALLBACK_WIDTH: usize = 40;

pub const FILE_SUMMARY_LABEL: &str = " File Summary ";
pub const AUTHOR_SUMMARY_LABEL: &str = " Author Summary ";

/// Width of the terminal attached to stdout, or [`FALLBACK_WIDTH`].
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size_of(io::stdout()).map_or(FALLBACK_WIDTH, |(Width(w), _)| usize::from(w))
}

/// Centers `label` in `width` columns padded with `fill`.
///
/// Odd padding goes to the right unless both the padding and the width are odd.
/// A label wider than `width` is returned unchanged.
#[must_use]
pub fn center(label: &str, width: usize, fill: char) -> String {
    let len = label.chars().count();
    if len >= width {
        return label.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;

    let mut line = String::with_capacity(width);
    line.extend(std::iter::repeat_n(fill, left));
    line.push_str(label);
    line.extend(std::iter::repeat_n(fill, right));
    line
}

#[must_use]
pub fn banner(label: &str, width: usize) -> String {
    center(label, width, '=')
}

/// Quotes `s` like a Python `str` repr: `'a'`, or `"it's"` when only `'` occurs.
#[must_use]
pub fn quote_item(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// `['a', 'b']`
#[must_use]
pub fn format_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let quoted: Vec<String> = items.into_iter().map(|item| quote_item(item.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}

pub(crate) fn path_text(path: &Path) -> String {
    path.display().to_string()
}

/// Writes both summary sections.
///
/// # Errors
///
/// Propagates write failures of `out`.
pub fn write_report<W: Write>(out: &mut W, summary: &AuthorSummary, width: usize) -> io::Result<()> {
    writeln!(out, "{}", banner(FILE_SUMMARY_LABEL, width))?;
    for (path, stats) in summary.files.iter() {
        writeln!(out, "{}", path.display())?;
        writeln!(out, " - total: {}", stats.total())?;
        writeln!(out, " - sloc: {}", stats.code_line_count)?;
        writeln!(out, " - comment_lines: {}", stats.comment_line_count)?;
        writeln!(out, " - authors: {}", format_list(&stats.authors))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", banner(AUTHOR_SUMMARY_LABEL, width))?;
    for (author, stats) in summary.authors.iter() {
        writeln!(out, "{author}:")?;
        writeln!(out, " - total: {}", stats.total())?;
        writeln!(out, " - sloc: {}", stats.code_line_count)?;
        writeln!(out, " - comment_lines: {}", stats.comment_line_count)?;
        writeln!(out, " - files: {}", format_list(stats.files.iter().map(|p| path_text(p))))?;
    }
    Ok(())
}

/// Prints the no-author diagnostic to stdout while scanning.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl ScanObserver for ConsoleObserver {
    fn on_file(&self, path: &Path) -> Result<()> {
        tracing::trace!(path = %path.display(), "scanning");
        Ok(())
    }

    fn on_missing_author(&self, path: &Path) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "file contains no @author tag: {}", path.display())
            .map_err(|err| PresentationError::Output(err).into())
    }
}

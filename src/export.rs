// src/export.rs
//! 著者テーブルのファイル出力

use std::io::{self, Write};
use std::path::Path;

use author_sloc_core::stats::AuthorTable;
use author_sloc_infra::persistence::FileWriter;
use author_sloc_shared_kernel::{InfrastructureError, Result};

use crate::presentation::{format_list, path_text};

pub const HEADER: &str = "author, total, sloc, comment_lines, files";

/// Writes the header and one row per author, in table order.
///
/// The file list is not escaped for CSV; paths containing commas or quotes are
/// written as they are.
pub fn write_author_table<W: Write>(out: &mut W, authors: &AuthorTable) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for (author, stats) in authors.iter() {
        writeln!(
            out,
            "{author}, {}, {}, {}, \"{}\"",
            stats.total(),
            stats.code_line_count,
            stats.comment_line_count,
            format_list(stats.files.iter().map(|p| path_text(p)))
        )?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the author table to it.
pub fn export_author_table(path: &Path, authors: &AuthorTable) -> Result<()> {
    FileWriter::write_with(path, |writer| write_author_table(writer, authors)).map_err(|source| {
        InfrastructureError::FileWrite {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

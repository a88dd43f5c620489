use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`, truncating any existing file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Run `write` against a fresh buffered writer for `path`, then flush it.
    ///
    /// The file handle is closed when this returns, on success and on error.
    pub fn write_with<P, F>(path: P, write: F) -> std::io::Result<()>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let mut writer = Self::create(path)?;
        write(&mut writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Write};

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn write_with_flushes_everything() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        FileWriter::write_with(&path, |w| {
            w.write_all(b"header\n")?;
            w.write_all(b"row\n")
        })
        .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "header\nrow\n");
    }

    #[test]
    fn create_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        assert!(FileWriter::create(dir.path().join("no/such/dir/out.csv")).is_err());
    }
}

use std::{
    fs,
    path::{Path, PathBuf},
};

/// 一時ディレクトリ管理
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// ファイルを作成
    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        self.create_binary(rel, contents.as_bytes())
    }

    /// バイナリファイルを作成
    pub fn create_binary(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }
}

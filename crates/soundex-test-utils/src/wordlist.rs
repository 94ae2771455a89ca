//! Temporary word-list files.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A word list written to a fresh temp directory.
///
/// The directory is deleted when this value is dropped, even on panic.
pub struct TempWordList {
    path: PathBuf,
    _temp_dir: TempDir,
}

impl TempWordList {
    /// Write `content` verbatim as the word list.
    pub fn with_bytes(content: &[u8]) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("words.txt");
        std::fs::write(&path, content).expect("failed to write test word list");
        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Write one word per line.
    pub fn with_words(words: &[&str]) -> Self {
        let mut content = words.join("\n");
        content.push('\n');
        Self::with_bytes(content.as_bytes())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A path inside the temp directory that does not exist.
    pub fn missing_sibling(&self) -> PathBuf {
        self.path.with_file_name("missing.txt")
    }
}

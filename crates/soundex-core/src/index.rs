//! Word index — Soundex codes for every word in a word list.
//!
//! The index is built in one pass from the raw bytes of a word list and is
//! read-only afterwards. Tokens are maximal runs of bytes other than space,
//! tab, carriage return and newline; each token is decoded as Latin-1 so any
//! byte sequence is accepted.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::code::Code;
use crate::encoder::encode;

/// Errors from loading a word list.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A word from the list together with its precomputed code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// The token as it appeared in the word list.
    pub word: String,
    /// Soundex code of `word`.
    pub code: Code,
}

/// Summary numbers for a built index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub entries: usize,
    pub distinct_codes: usize,
    pub skipped: usize,
}

/// In-memory word index, in word-list order.
#[derive(Debug, Default)]
pub struct WordIndex {
    entries: Vec<IndexEntry>,
    skipped: usize,
}

impl WordIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from the raw contents of a word list.
    ///
    /// Tokens that cannot be encoded (those starting with a non-letter) are
    /// skipped and counted in [`skipped`](Self::skipped).
    pub fn build(source: &[u8]) -> Self {
        let mut index = Self::new();
        for token in tokens(source) {
            let word = decode_latin1(token);
            match encode(&word) {
                Ok(code) => index.entries.push(IndexEntry { word, code }),
                Err(e) => {
                    debug!(token = %word, error = %e, "Skipping unencodable token");
                    index.skipped += 1;
                }
            }
        }
        index
    }

    /// Read and index the word list at `path`.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let source = std::fs::read(path).map_err(|source| IndexError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::build(&source);
        info!(
            path = %path.display(),
            entries = index.len(),
            skipped = index.skipped,
            "Word list indexed"
        );
        Ok(index)
    }

    /// Like [`load`](Self::load), but an unreadable word list produces an
    /// empty index and a warning instead of an error.
    ///
    /// The error is handed back next to the index so the caller can still
    /// tell the user, whatever the log filter lets through.
    pub fn load_or_empty(path: &Path) -> (Self, Option<IndexError>) {
        match Self::load(path) {
            Ok(index) => (index, None),
            Err(e) => {
                warn!(error = %e, "Word list unavailable, continuing with an empty index");
                (Self::new(), Some(e))
            }
        }
    }

    /// Entries whose code equals `code`, in word-list order.
    pub fn entries_with_code(&self, code: Code) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter().filter(move |e| e.code == code)
    }

    /// All entries.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the index empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tokens rejected by the encoder.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Distinct codes present in the index, sorted.
    pub fn codes(&self) -> BTreeSet<Code> {
        self.entries.iter().map(|e| e.code).collect()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            entries: self.len(),
            distinct_codes: self.codes().len(),
            skipped: self.skipped,
        }
    }
}

impl<'a> IntoIterator for &'a WordIndex {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn is_separator(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Split on separator bytes, dropping the empty pieces between runs.
fn tokens(source: &[u8]) -> impl Iterator<Item = &[u8]> {
    source.split(is_separator).filter(|t| !t.is_empty())
}

/// Latin-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

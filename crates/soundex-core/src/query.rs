//! Phonetic lookup against a [`WordIndex`].
//!
//! [`find_matches`] is the single-query primitive. [`run_queries`] and
//! [`encode_all`] process a batch of words independently, turning encoder
//! rejections into per-word outcomes so that one bad word never hides the
//! results for the others.

use serde::Serialize;
use tracing::debug;

use crate::code::Code;
use crate::encoder::{EncodeError, encode};
use crate::index::{IndexEntry, WordIndex};

/// Every entry in `index` whose code equals the code of `query`, in index order.
pub fn find_matches<'a>(
    index: &'a WordIndex,
    query: &str,
) -> Result<Vec<&'a IndexEntry>, EncodeError> {
    let code = encode(query)?;
    Ok(index.entries_with_code(code).collect())
}

/// Result of looking up one query word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub query: String,
    pub code: Code,
    /// Matching words, in word-list order.
    pub matches: Vec<String>,
}

impl MatchReport {
    pub fn count(&self) -> usize {
        self.matches.len()
    }
}

/// Result of encoding one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    pub word: String,
    pub code: Code,
}

/// Per-word outcome of a batch operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    Ok(T),
    Invalid { word: String, error: String },
}

impl<T> Outcome<T> {
    fn invalid(word: &str, error: &EncodeError) -> Self {
        Outcome::Invalid {
            word: word.to_string(),
            error: error.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }
}

pub type QueryOutcome = Outcome<MatchReport>;
pub type EncodeOutcome = Outcome<EncodeReport>;

/// Look up each query word in order.
pub fn run_queries<S: AsRef<str>>(index: &WordIndex, queries: &[S]) -> Vec<QueryOutcome> {
    queries
        .iter()
        .map(|q| {
            let query = q.as_ref();
            match encode(query) {
                Ok(code) => {
                    let matches: Vec<String> = index
                        .entries_with_code(code)
                        .map(|e| e.word.clone())
                        .collect();
                    debug!(query, %code, matches = matches.len(), "Query evaluated");
                    Outcome::Ok(MatchReport {
                        query: query.to_string(),
                        code,
                        matches,
                    })
                }
                Err(e) => Outcome::invalid(query, &e),
            }
        })
        .collect()
}

/// Encode each word in order, without consulting an index.
pub fn encode_all<S: AsRef<str>>(words: &[S]) -> Vec<EncodeOutcome> {
    words
        .iter()
        .map(|w| {
            let word = w.as_ref();
            match encode(word) {
                Ok(code) => Outcome::Ok(EncodeReport {
                    word: word.to_string(),
                    code,
                }),
                Err(e) => Outcome::invalid(word, &e),
            }
        })
        .collect()
}

#![deny(unsafe_code)]

//! Soundex phonetic encoding and word lookup.
//!
//! The crate is layered leaves first:
//!
//! ```text
//! word ──► encoder::encode ──► Code
//!
//! word list bytes ──► index::WordIndex::build ──► [IndexEntry { word, code }]
//!                                                        │
//! query word ──► encode ──► query::find_matches ◄────────┘
//! ```
//!
//! Everything is synchronous. A [`WordIndex`] is built once and only
//! borrowed afterwards; match results borrow their entries from it.

/// Compile-time build metadata (version, git hash, profile).
pub mod build_info;
/// The four-character [`Code`] value type.
pub mod code;
/// Soundex encoding of a single word.
pub mod encoder;
/// Word-list indexing by code.
pub mod index;
/// Phonetic lookup and batch reports.
pub mod query;

pub use code::{Code, CodeParseError};
pub use encoder::{EncodeError, LetterClass, classify, encode};
pub use index::{IndexEntry, IndexError, IndexStats, WordIndex};
pub use query::{
    EncodeOutcome, EncodeReport, MatchReport, Outcome, QueryOutcome, encode_all, find_matches,
    run_queries,
};

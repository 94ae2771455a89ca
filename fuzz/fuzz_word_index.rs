//! Fuzz target for word-list tokenizing and indexing.
//!
//! Run with: cargo +nightly fuzz run fuzz_word_index
//!
//! Arbitrary bytes are a valid word list; every token is either indexed or
//! counted as skipped.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let index = soundex_core::WordIndex::build(data);
    let tokens = data
        .split(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
        .filter(|t| !t.is_empty())
        .count();
    assert_eq!(index.len() + index.skipped(), tokens);
});

//! Classic Soundex encoding.
//!
//! ## Rules
//!
//! 1. Keep the first letter (uppercased).
//! 2. Map the remaining consonants to digits:
//!
//! ```text
//! 1: b f p v
//! 2: c g j k q s x z
//! 3: d t
//! 4: l
//! 5: m n
//! 6: r
//! ```
//!
//! 3. Adjacent letters with the same digit produce one digit. This also
//!    applies to the first letter, so `Pfister` codes the `f` as a duplicate
//!    of `P`. Letters separated by `h` or `w` still count as adjacent; letters
//!    separated by a vowel (`a e i o u y`) are coded twice.
//! 4. Stop after three digits; pad with `0` when fewer were produced.
//!
//! Characters outside `A-Z`/`a-z` after the first position are skipped
//! without affecting adjacency.

use crate::code::{CODE_LEN, Code};

/// Errors for words that cannot be encoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("cannot encode an empty word")]
    Empty,

    #[error("word must start with an ASCII letter, found {0:?}")]
    NonAlphabeticLead(char),
}

/// How a letter participates in encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterClass {
    /// Consonant coded as the given digit (1-6).
    Digit(u8),
    /// `h` and `w`: emit nothing and keep the previous digit for adjacency.
    Transparent,
    /// `a e i o u y`: emit nothing and clear the previous digit.
    Vowel,
}

impl LetterClass {
    /// The digit for a coded consonant, `None` otherwise.
    pub const fn digit(self) -> Option<u8> {
        match self {
            LetterClass::Digit(d) => Some(d),
            LetterClass::Transparent | LetterClass::Vowel => None,
        }
    }
}

use LetterClass::{Digit, Transparent, Vowel};

/// Class of each letter `A` through `Z`.
const LETTER_CLASSES: [LetterClass; 26] = [
    Vowel,       // A
    Digit(1),    // B
    Digit(2),    // C
    Digit(3),    // D
    Vowel,       // E
    Digit(1),    // F
    Digit(2),    // G
    Transparent, // H
    Vowel,       // I
    Digit(2),    // J
    Digit(2),    // K
    Digit(4),    // L
    Digit(5),    // M
    Digit(5),    // N
    Vowel,       // O
    Digit(1),    // P
    Digit(2),    // Q
    Digit(6),    // R
    Digit(2),    // S
    Digit(3),    // T
    Vowel,       // U
    Digit(1),    // V
    Transparent, // W
    Digit(2),    // X
    Vowel,       // Y
    Digit(2),    // Z
];

/// Classify a character, case-insensitively. Non-ASCII-letters yield `None`.
pub fn classify(c: char) -> Option<LetterClass> {
    if c.is_ascii_alphabetic() {
        let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
        Some(LETTER_CLASSES[index])
    } else {
        None
    }
}

/// Encode `word` as a four-character Soundex [`Code`].
///
/// The word must be non-empty and start with an ASCII letter.
///
/// ```
/// use soundex_core::encode;
///
/// assert_eq!(encode("Robert").unwrap().as_str(), "R163");
/// assert_eq!(encode("Ashcraft").unwrap().as_str(), "A261");
/// ```
pub fn encode(word: &str) -> Result<Code, EncodeError> {
    let mut chars = word.chars();
    let first = chars.next().ok_or(EncodeError::Empty)?;
    if !first.is_ascii_alphabetic() {
        return Err(EncodeError::NonAlphabeticLead(first));
    }

    let mut out = [b'0'; CODE_LEN];
    out[0] = first.to_ascii_uppercase() as u8;
    let mut len = 1;
    let mut previous = classify(first).and_then(LetterClass::digit);

    for c in chars {
        if len == CODE_LEN {
            break;
        }
        match classify(c) {
            Some(Vowel) => previous = None,
            Some(Transparent) | None => {}
            Some(Digit(d)) => {
                if previous != Some(d) {
                    out[len] = b'0' + d;
                    len += 1;
                }
                previous = Some(d);
            }
        }
    }

    Ok(Code::from_bytes_unchecked(out))
}

//! The fixed-width Soundex code value.
//!
//! A [`Code`] is always exactly four ASCII bytes: one uppercase letter
//! followed by three decimal digits. The only ways to obtain one are
//! [`encode`](crate::encoder::encode) and [`Code::from_str`], both of which
//! uphold that shape, so a `Code` in hand never needs re-validation.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Length of every Soundex code: one letter plus three digits.
pub const CODE_LEN: usize = 4;

/// A four-character Soundex code such as `R163`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code([u8; CODE_LEN]);

/// Errors from parsing a string into a [`Code`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeParseError {
    #[error("soundex code must be {CODE_LEN} characters, got {0}")]
    Length(usize),

    #[error("soundex code must start with an uppercase letter, got {0:?}")]
    Letter(char),

    #[error("soundex code digit at position {position} must be 0-9, got {found:?}")]
    Digit { position: usize, found: char },
}

impl Code {
    /// Assemble a code from an already-validated byte array.
    ///
    /// Callers inside the crate guarantee the letter + three digits shape.
    pub(crate) const fn from_bytes_unchecked(bytes: [u8; CODE_LEN]) -> Self {
        Self(bytes)
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        // Every byte is ASCII by construction.
        std::str::from_utf8(&self.0).unwrap_or("????")
    }

    /// The leading letter.
    pub fn letter(&self) -> char {
        self.0[0] as char
    }

    /// The three digits as numeric values.
    pub fn digits(&self) -> [u8; 3] {
        [self.0[1] - b'0', self.0[2] - b'0', self.0[3] - b'0']
    }

    /// Whether `word` encodes to this code. Invalid words never match.
    pub fn is_match(&self, word: &str) -> bool {
        crate::encoder::encode(word).is_ok_and(|code| code == *self)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Code {
    type Err = CodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CODE_LEN {
            return Err(CodeParseError::Length(chars.len()));
        }
        if !chars[0].is_ascii_uppercase() {
            return Err(CodeParseError::Letter(chars[0]));
        }

        let mut bytes = [0u8; CODE_LEN];
        bytes[0] = chars[0] as u8;
        for (position, &c) in chars.iter().enumerate().skip(1) {
            if !c.is_ascii_digit() {
                return Err(CodeParseError::Digit { position, found: c });
            }
            bytes[position] = c as u8;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

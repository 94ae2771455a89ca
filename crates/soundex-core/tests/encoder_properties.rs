//! Universal properties of the encoder, checked over generated words.

use proptest::prelude::*;
use soundex_core::{EncodeError, encode};

proptest! {
    #[test]
    fn code_is_letter_and_three_digits(word in "[A-Za-z][A-Za-z]{0,24}") {
        let code = encode(&word).unwrap();
        let bytes = code.as_str().as_bytes();
        prop_assert_eq!(bytes.len(), 4);
        prop_assert!(bytes[0].is_ascii_uppercase());
        prop_assert!(bytes[1..].iter().all(u8::is_ascii_digit));
    }

    #[test]
    fn first_letter_is_kept(word in "[A-Za-z][A-Za-z]{0,24}") {
        let code = encode(&word).unwrap();
        let first = word.chars().next().unwrap().to_ascii_uppercase();
        prop_assert_eq!(code.letter(), first);
    }

    #[test]
    fn case_does_not_matter(word in "[A-Za-z]{1,25}") {
        let code = encode(&word).unwrap();
        prop_assert_eq!(code, encode(&word.to_ascii_uppercase()).unwrap());
        prop_assert_eq!(code, encode(&word.to_ascii_lowercase()).unwrap());
    }

    #[test]
    fn encoding_is_deterministic(word in "[A-Za-z]{1,25}") {
        prop_assert_eq!(encode(&word), encode(&word));
    }

    #[test]
    fn digits_are_in_class_range(word in "[A-Za-z]{1,25}") {
        let code = encode(&word).unwrap();
        prop_assert!(code.digits().iter().all(|&d| d <= 6));
    }

    #[test]
    fn arbitrary_text_never_panics(word in "\\PC{0,32}") {
        match encode(&word) {
            Ok(code) => prop_assert_eq!(code.as_str().len(), 4),
            Err(EncodeError::Empty) => prop_assert!(word.is_empty()),
            Err(EncodeError::NonAlphabeticLead(c)) => {
                prop_assert!(!c.is_ascii_alphabetic());
            }
        }
    }

    #[test]
    fn code_string_parses_back(word in "[A-Za-z]{1,25}") {
        let code = encode(&word).unwrap();
        prop_assert_eq!(code.as_str().parse::<soundex_core::Code>().unwrap(), code);
    }
}

//! Fuzz target for the Soundex encoder.
//!
//! Run with: cargo +nightly fuzz run fuzz_encode
//!
//! Any UTF-8 input must either be rejected with an `EncodeError` or produce
//! a well-formed four-character code. Panics are failures.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(code) = soundex_core::encode(s) {
        let bytes = code.as_str().as_bytes();
        assert_eq!(bytes.len(), 4);
        assert!(bytes[0].is_ascii_uppercase());
        assert!(bytes[1..].iter().all(u8::is_ascii_digit));
    }
});

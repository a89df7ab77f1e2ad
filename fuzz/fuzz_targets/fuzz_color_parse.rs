//! Fuzz target: `color::parse`
//!
//! Invariants checked:
//! - No panics under any byte sequence
//! - `Ok` only for exactly seven ASCII bytes starting with `#`
//! - An accepted colour displays back as the uppercased input
//! - A rejection echoes a prefix of the input
//!
//! cargo fuzz run fuzz_color_parse

#![no_main]

use libfuzzer_sys::fuzz_target;
use rgblamp::app::color::parse;
use rgblamp::error::ParseError;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = core::str::from_utf8(data) else {
        return;
    };

    match parse(input) {
        Ok(rgb) => {
            assert_eq!(input.len(), 7);
            assert!(input.starts_with('#'));
            assert_eq!(rgb.to_string(), input.to_ascii_uppercase());
        }
        Err(ParseError::InvalidFormat { input: echoed }) => {
            assert!(input.starts_with(echoed.as_str()));
        }
    }
});

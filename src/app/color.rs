//! Hex colour parsing.
//!
//! Accepts exactly `#RRGGBB` (hex digits in either case) and nothing else:
//! no shorthand `#RGB`, no alpha, no surrounding whitespace, no named
//! colours.  Parsing is pure; callers decide what to log.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, echo};

/// Length of a `#RRGGBB` colour string.
pub const COLOR_SPEC_LEN: usize = 7;

/// Three 8-bit channel intensities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// All channels off.
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Intensities in channel order (red, green, blue).
    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a `#RRGGBB` string.
///
/// Checks run in order: length, leading `#`, then every digit.  Any
/// failure yields [`ParseError::InvalidFormat`] with the input attached.
pub fn parse(input: &str) -> Result<Rgb, ParseError> {
    let invalid = || ParseError::InvalidFormat { input: echo(input) };

    let bytes = input.as_bytes();
    if bytes.len() != COLOR_SPEC_LEN || bytes[0] != b'#' {
        return Err(invalid());
    }

    let mut digits = [0u8; 6];
    for (d, &c) in digits.iter_mut().zip(&bytes[1..]) {
        *d = nibble(c).ok_or_else(invalid)?;
    }

    Ok(Rgb {
        red: (digits[0] << 4) | digits[1],
        green: (digits[2] << 4) | digits[3],
        blue: (digits[4] << 4) | digits[5],
    })
}

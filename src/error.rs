//! Error types for the colour-command pipeline.
//!
//! Each layer has its own enum so callers can match exactly the failures
//! that layer can produce:
//!
//! ```text
//!   ParseError  ─┐
//!                ├──▶ CommandError ──▶ HTTP status
//!   DriverError ─┘
//!       ▲
//!   ChannelError (one channel write/configure)
//! ```
//!
//! Errors that echo user input keep a bounded copy so they stay
//! fixed-size and never allocate.

use core::fmt;

/// Longest slice of rejected input kept for diagnostics.
pub const MAX_ECHO_LEN: usize = 32;

/// Bounded copy of untrusted input carried inside errors.
pub type EchoString = heapless::String<MAX_ECHO_LEN>;

/// Copy at most [`MAX_ECHO_LEN`] bytes of `input`, cut on a char boundary.
pub fn echo(input: &str) -> EchoString {
    let mut end = input.len().min(MAX_ECHO_LEN);
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    // `end <= MAX_ECHO_LEN`, so this always fits.
    EchoString::try_from(&input[..end]).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong length, missing `#`, or a non-hex digit.
    InvalidFormat { input: EchoString },
}

impl ParseError {
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input } => input.as_str(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { input } => {
                write!(f, "invalid colour '{input}': expected #RRGGBB")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Channel capability
// ---------------------------------------------------------------------------

/// Failure reported by a single [`ChannelOutput`](crate::app::ports::ChannelOutput).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelError {
    /// Timer or channel configuration was refused (ESP-IDF return code).
    ConfigFailed(i32),
    /// Duty-cycle update was refused (ESP-IDF return code).
    WriteFailed(i32),
    /// The underlying PWM pin reported an error.
    Pwm,
    /// Only 8-bit duty resolution is supported.
    UnsupportedResolution(u8),
    /// Written before `configure` succeeded.
    NotConfigured,
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigFailed(rc) => write!(f, "channel config failed (rc={rc})"),
            Self::WriteFailed(rc) => write!(f, "duty write failed (rc={rc})"),
            Self::Pwm => write!(f, "PWM output error"),
            Self::UnsupportedResolution(bits) => {
                write!(f, "unsupported resolution: {bits} bits (need 8)")
            }
            Self::NotConfigured => write!(f, "channel not configured"),
        }
    }
}

// ---------------------------------------------------------------------------
// Channel driver
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// Channel `index` (0 = red, 1 = green, 2 = blue) refused a write.
    /// Channels before it keep their new value.
    ChannelFault { index: usize, cause: ChannelError },
}

impl DriverError {
    pub fn index(&self) -> usize {
        match self {
            Self::ChannelFault { index, .. } => *index,
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelFault { index, cause } => {
                write!(f, "channel {index} fault: {cause}")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Command boundary
// ---------------------------------------------------------------------------

/// User-visible outcome of a rejected command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The request carried no body.
    MissingBody,
    /// The body was not a `#RRGGBB` colour.
    InvalidColor { input: EchoString },
    /// A channel write failed part-way through the apply.
    HardwareFault { index: usize },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBody => write!(f, "missing body"),
            Self::InvalidColor { input } => write!(f, "invalid colour '{input}'"),
            Self::HardwareFault { index } => write!(f, "hardware fault on channel {index}"),
        }
    }
}

impl From<ParseError> for CommandError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::InvalidFormat { input } => Self::InvalidColor { input },
        }
    }
}

impl From<DriverError> for CommandError {
    fn from(e: DriverError) -> Self {
        Self::HardwareFault { index: e.index() }
    }
}

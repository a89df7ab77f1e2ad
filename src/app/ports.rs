//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LampService (domain)
//! ```
//!
//! Driven adapters (PWM channels, event sinks, config storage) implement
//! these traits.  The [`LampService`](super::service::LampService) consumes
//! them via generics, so the domain core never touches hardware directly.

use crate::config::LampConfig;
use crate::error::ChannelError;

// ───────────────────────────────────────────────────────────────
// Channel output (driven adapter: domain → PWM hardware)
// ───────────────────────────────────────────────────────────────

/// One PWM output line driving a single colour component.
///
/// The hardware layer calls [`configure`](Self::configure) once at boot;
/// the pipeline only ever calls [`write`](Self::write).
pub trait ChannelOutput {
    /// Set the PWM frequency and duty resolution.
    fn configure(&mut self, frequency_hz: u32, resolution_bits: u8) -> Result<(), ChannelError>;

    /// Set the duty cycle to `intensity` / 255.
    fn write(&mut self, intensity: u8) -> Result<(), ChannelError>;
}

impl<C: ChannelOutput + ?Sized> ChannelOutput for &mut C {
    fn configure(&mut self, frequency_hz: u32, resolution_bits: u8) -> Result<(), ChannelError> {
        (**self).configure(frequency_hz, resolution_bits)
    }

    fn write(&mut self, intensity: u8) -> Result<(), ChannelError> {
        (**self).write(intensity)
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists the lamp configuration.
///
/// Implementations MUST call [`LampConfig::validate`] before persisting.
pub trait ConfigPort {
    /// Load configuration from persistent storage.
    /// Returns [`LampConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<LampConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&mut self, config: &LampConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations and config validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

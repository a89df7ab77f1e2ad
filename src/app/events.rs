//! Outbound application events.
//!
//! The [`LampService`](super::service::LampService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use super::color::Rgb;
use crate::error::CommandError;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Channels configured and driven to their boot colour.
    Started(Rgb),

    /// A colour was written to all three channels.
    ColorApplied(Rgb),

    /// A command was refused; nothing or only part of it was applied.
    CommandRejected(CommandError),
}

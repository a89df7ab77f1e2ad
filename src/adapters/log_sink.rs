//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::error::CommandError;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(rgb) => {
                info!("START | colour={}", rgb);
            }
            AppEvent::ColorApplied(rgb) => {
                info!("COLOR | R={} G={} B={}", rgb.red, rgb.green, rgb.blue);
            }
            AppEvent::CommandRejected(CommandError::HardwareFault { index }) => {
                warn!("REJECT | hardware fault on channel {}", index);
            }
            AppEvent::CommandRejected(e) => {
                info!("REJECT | {}", e);
            }
        }
    }
}

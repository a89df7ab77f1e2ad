//! Mock hardware for integration tests.
//!
//! Every channel write lands in one shared, ordered log so tests can
//! assert on the exact sequence across all three channels.

use std::sync::{Arc, Mutex};

use rgblamp::app::events::AppEvent;
use rgblamp::app::ports::{ChannelOutput, EventSink};
use rgblamp::error::ChannelError;

// ── Channel write record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCall {
    Configure { index: usize, frequency_hz: u32, resolution_bits: u8 },
    Write { index: usize, intensity: u8 },
}

#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<ChannelCall>>>);

#[allow(dead_code)]
impl CallLog {
    pub fn calls(&self) -> Vec<ChannelCall> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }

    /// Only the writes, as `(index, intensity)` pairs.
    pub fn writes(&self) -> Vec<(usize, u8)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ChannelCall::Write { index, intensity } => Some((index, intensity)),
                ChannelCall::Configure { .. } => None,
            })
            .collect()
    }

    fn push(&self, call: ChannelCall) {
        self.0.lock().unwrap().push(call);
    }
}

// ── MockChannel ───────────────────────────────────────────────

pub struct MockChannel {
    index: usize,
    log: CallLog,
    fail_writes: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockChannel {
    /// Three channels (red, green, blue) sharing `log`.
    pub fn rgb(log: &CallLog) -> [Self; 3] {
        [0, 1, 2].map(|index| Self {
            index,
            log: log.clone(),
            fail_writes: Arc::new(Mutex::new(false)),
        })
    }

    /// Handle that makes this channel's writes fail while set.
    pub fn fault_switch(&self) -> Arc<Mutex<bool>> {
        Arc::clone(&self.fail_writes)
    }
}

impl ChannelOutput for MockChannel {
    fn configure(&mut self, frequency_hz: u32, resolution_bits: u8) -> Result<(), ChannelError> {
        self.log.push(ChannelCall::Configure {
            index: self.index,
            frequency_hz,
            resolution_bits,
        });
        Ok(())
    }

    fn write(&mut self, intensity: u8) -> Result<(), ChannelError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(ChannelError::WriteFailed(-1));
        }
        self.log.push(ChannelCall::Write {
            index: self.index,
            intensity,
        });
        Ok(())
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

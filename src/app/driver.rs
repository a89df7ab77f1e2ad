//! Channel driver — applies an [`Rgb`] to the three PWM outputs.
//!
//! The driver owns its channels for its whole lifetime, so no other code
//! can write them in the middle of an apply.  It never configures them:
//! frequency and resolution are set by the hardware layer beforehand
//! (see [`LampService::start`](super::service::LampService::start)).
//!
//! Writes are fire-and-forget.  A fault on one channel stops the apply
//! but does not roll back channels already written.

use core::fmt;

use super::color::Rgb;
use super::ports::ChannelOutput;
use crate::error::DriverError;

/// Colour component driven by a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    /// All channels in write order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct ChannelDriver<C> {
    channels: [C; 3],
}

impl<C: ChannelOutput> ChannelDriver<C> {
    /// Take ownership of already-configured channels, indexed red, green, blue.
    pub fn new(channels: [C; 3]) -> Self {
        Self { channels }
    }

    /// Write red → channel 0, green → 1, blue → 2.
    pub fn apply(&mut self, value: Rgb) -> Result<(), DriverError> {
        for (index, (channel, intensity)) in self
            .channels
            .iter_mut()
            .zip(value.channels())
            .enumerate()
        {
            channel
                .write(intensity)
                .map_err(|cause| DriverError::ChannelFault { index, cause })?;
        }
        Ok(())
    }

    pub fn channel(&self, which: Channel) -> &C {
        &self.channels[which.index()]
    }
}

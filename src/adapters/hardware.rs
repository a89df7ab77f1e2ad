//! Hardware adapter for any `embedded-hal` PWM output.
//!
//! [`PwmChannel`] turns a [`SetDutyCycle`] pin into a [`ChannelOutput`],
//! so boards that expose their timers through `embedded-hal` (including
//! `esp_idf_svc::hal`'s `LedcDriver`) can drive the lamp without raw register
//! access.  The 8-bit intensity is scaled onto the pin's own duty range.

use embedded_hal::pwm::SetDutyCycle;
use log::debug;

use crate::app::ports::ChannelOutput;
use crate::error::ChannelError;
use crate::pins;

pub struct PwmChannel<P> {
    pin: P,
    configured: bool,
}

impl<P: SetDutyCycle> PwmChannel<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            configured: false,
        }
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P: SetDutyCycle> ChannelOutput for PwmChannel<P> {
    /// The pin's timer already fixes the frequency; only the resolution
    /// is checked here, and the output starts fully off.
    fn configure(&mut self, frequency_hz: u32, resolution_bits: u8) -> Result<(), ChannelError> {
        if resolution_bits != pins::PWM_RESOLUTION_BITS {
            return Err(ChannelError::UnsupportedResolution(resolution_bits));
        }
        debug!(
            "PwmChannel: {} Hz requested, max duty {}",
            frequency_hz,
            self.pin.max_duty_cycle()
        );
        self.pin
            .set_duty_cycle_fully_off()
            .map_err(|_| ChannelError::Pwm)?;
        self.configured = true;
        Ok(())
    }

    fn write(&mut self, intensity: u8) -> Result<(), ChannelError> {
        if !self.configured {
            return Err(ChannelError::NotConfigured);
        }
        self.pin
            .set_duty_cycle_fraction(u16::from(intensity), u16::from(u8::MAX))
            .map_err(|_| ChannelError::Pwm)
    }
}

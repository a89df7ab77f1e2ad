//! RGB LED colour channel on an ESP32 LEDC output.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives one LEDC PWM channel via hw_init.
//! On host/test: tracks state in-memory only.

use crate::app::driver::Channel;
use crate::app::ports::ChannelOutput;
use crate::drivers::hw_init;
use crate::error::ChannelError;
use crate::pins;

pub struct LedcChannel {
    ledc_channel: u32,
    gpio: i32,
    configured: bool,
    duty: u8,
}

impl LedcChannel {
    pub fn new(colour: Channel, gpio: i32) -> Self {
        let ledc_channel = match colour {
            Channel::Red => hw_init::LEDC_CH_LED_R,
            Channel::Green => hw_init::LEDC_CH_LED_G,
            Channel::Blue => hw_init::LEDC_CH_LED_B,
        };
        Self {
            ledc_channel,
            gpio,
            configured: false,
            duty: 0,
        }
    }

    /// Build all three channels from a pin map, in red, green, blue order.
    pub fn rgb(pins: [i32; 3]) -> [Self; 3] {
        let [r, g, b] = pins;
        [
            Self::new(Channel::Red, r),
            Self::new(Channel::Green, g),
            Self::new(Channel::Blue, b),
        ]
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Last duty value latched on the hardware.
    pub fn current_duty(&self) -> u8 {
        self.duty
    }
}

impl ChannelOutput for LedcChannel {
    fn configure(&mut self, frequency_hz: u32, resolution_bits: u8) -> Result<(), ChannelError> {
        if resolution_bits != pins::PWM_RESOLUTION_BITS {
            return Err(ChannelError::UnsupportedResolution(resolution_bits));
        }
        hw_init::ledc_configure(self.ledc_channel, self.gpio, frequency_hz, resolution_bits)
            .map_err(ChannelError::ConfigFailed)?;
        self.configured = true;
        self.duty = 0;
        Ok(())
    }

    fn write(&mut self, intensity: u8) -> Result<(), ChannelError> {
        if !self.configured {
            return Err(ChannelError::NotConfigured);
        }
        hw_init::ledc_set(self.ledc_channel, intensity).map_err(ChannelError::WriteFailed)?;
        self.duty = intensity;
        Ok(())
    }
}

//! PWM channel drivers and raw peripheral helpers.

pub mod hw_init;
pub mod ledc_channel;

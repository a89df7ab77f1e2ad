//! GPIO / peripheral pin assignments for the lamp board.
//!
//! Single source of truth for the defaults in [`LampConfig`](crate::config::LampConfig).
//! Every value here can be overridden by a stored config.

// ---------------------------------------------------------------------------
// RGB LED (common-cathode, one LEDC channel per colour)
// ---------------------------------------------------------------------------

pub const LED_R_GPIO: i32 = 23;
pub const LED_G_GPIO: i32 = 22;
pub const LED_B_GPIO: i32 = 21;

/// Highest GPIO number on any supported ESP32 variant (S3).
pub const MAX_GPIO: i32 = 48;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u8 = 8;
/// LEDC frequency for the RGB LED (5 kHz, flicker-free).
pub const LED_PWM_FREQ_HZ: u32 = 5_000;
/// Upper bound accepted by the LEDC timer at 8-bit resolution.
pub const MAX_PWM_FREQ_HZ: u32 = 40_000_000;

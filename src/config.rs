//! Lamp configuration parameters.
//!
//! Defaults reproduce the factory wiring (see [`crate::pins`]).  Values can
//! be overridden by a config blob stored in NVS.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::app::color::Rgb;
use crate::app::ports::{ConfigError, ConfigPort};
use crate::pins;

/// GPIO for each colour channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinMap {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl PinMap {
    /// Pins in channel order (red, green, blue).
    pub const fn as_array(&self) -> [i32; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            red: pins::LED_R_GPIO,
            green: pins::LED_G_GPIO,
            blue: pins::LED_B_GPIO,
        }
    }
}

/// Soft-AP the lamp opens for its command endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPointConfig {
    pub ssid: heapless::String<MAX_SSID_LEN>,
    /// Empty for an open network.
    pub password: heapless::String<MAX_PASSWORD_LEN>,
    pub channel: u8,
}

impl Default for AccessPointConfig {
    fn default() -> Self {
        // Both fit: checked at compile time below.
        Self {
            ssid: heapless::String::try_from(DEFAULT_AP_SSID).unwrap_or_default(),
            password: heapless::String::try_from(DEFAULT_AP_PASSWORD).unwrap_or_default(),
            channel: 1,
        }
    }
}

pub const MAX_SSID_LEN: usize = 32;
pub const MAX_PASSWORD_LEN: usize = 64;

pub const DEFAULT_AP_SSID: &str = "RGB-Lamp";
pub const DEFAULT_AP_PASSWORD: &str = "rgb-lamp-setup";

const _: () = assert!(DEFAULT_AP_SSID.len() <= MAX_SSID_LEN);
const _: () = assert!(DEFAULT_AP_PASSWORD.len() <= MAX_PASSWORD_LEN);

/// Core lamp configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LampConfig {
    // --- PWM ---
    /// LEDC timer frequency shared by all three channels.
    pub pwm_frequency_hz: u32,
    /// Duty resolution; the pipeline writes 8-bit intensities.
    pub pwm_resolution_bits: u8,
    pub pins: PinMap,

    // --- Boot ---
    /// Colour applied after the channels are blanked; `None` stays dark.
    pub startup_color: Option<Rgb>,

    // --- Network ---
    /// `None` runs standalone: startup colour only, no command endpoint.
    pub access_point: Option<AccessPointConfig>,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            pwm_frequency_hz: pins::LED_PWM_FREQ_HZ,
            pwm_resolution_bits: pins::PWM_RESOLUTION_BITS,
            pins: PinMap::default(),
            startup_color: None,
            access_point: Some(AccessPointConfig::default()),
        }
    }
}

impl LampConfig {
    /// No network: show solid blue and never accept commands.
    pub fn standalone() -> Self {
        Self {
            startup_color: Some(Rgb::new(0, 0, 255)),
            access_point: None,
            ..Self::default()
        }
    }

    /// Range-check every field.  Stored configs must pass this before use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=pins::MAX_PWM_FREQ_HZ).contains(&self.pwm_frequency_hz) {
            return Err(ConfigError::ValidationFailed(
                "pwm_frequency_hz must be 1–40000000",
            ));
        }
        if self.pwm_resolution_bits != pins::PWM_RESOLUTION_BITS {
            return Err(ConfigError::ValidationFailed(
                "pwm_resolution_bits must be 8",
            ));
        }

        let gpios = self.pins.as_array();
        if gpios.iter().any(|g| !(0..=pins::MAX_GPIO).contains(g)) {
            return Err(ConfigError::ValidationFailed("pins must be GPIO 0–48"));
        }
        if gpios[0] == gpios[1] || gpios[0] == gpios[2] || gpios[1] == gpios[2] {
            return Err(ConfigError::ValidationFailed("pins must be distinct"));
        }

        if let Some(ap) = &self.access_point {
            validate_ssid(&ap.ssid)?;
            validate_password(&ap.password)?;
            if !(1..=13).contains(&ap.channel) {
                return Err(ConfigError::ValidationFailed(
                    "access_point.channel must be 1–13",
                ));
            }
        }
        Ok(())
    }
}

/// Load the stored config, falling back to defaults.
///
/// A blob that is corrupted or fails validation is overwritten with the
/// defaults so the next boot starts clean.  Storage I/O errors leave the
/// store untouched.
pub fn load_or_reset(store: &mut impl ConfigPort) -> LampConfig {
    match store.load() {
        Ok(cfg) => cfg,
        Err(ConfigError::IoError) => {
            warn!("Config load failed (I/O error), using defaults");
            LampConfig::default()
        }
        Err(e) => {
            warn!("Stored config rejected ({}), resetting to defaults", e);
            let defaults = LampConfig::default();
            if let Err(e) = store.save(&defaults) {
                warn!("Config reset failed ({})", e);
            }
            defaults
        }
    }
}

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

/// SSID: 1–32 printable ASCII bytes.
pub fn validate_ssid(ssid: &str) -> Result<(), ConfigError> {
    if ssid.is_empty() || ssid.len() > MAX_SSID_LEN || !is_printable_ascii(ssid) {
        return Err(ConfigError::ValidationFailed(
            "access_point.ssid must be 1–32 printable ASCII bytes",
        ));
    }
    Ok(())
}

/// WPA2 passphrase: 8–64 bytes, or empty for an open network.
pub fn validate_password(password: &str) -> Result<(), ConfigError> {
    if password.is_empty() {
        return Ok(());
    }
    if password.len() < 8 || password.len() > MAX_PASSWORD_LEN {
        return Err(ConfigError::ValidationFailed(
            "access_point.password must be empty or 8–64 bytes",
        ));
    }
    Ok(())
}

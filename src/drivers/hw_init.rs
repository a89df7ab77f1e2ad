//! LEDC PWM register helpers.
//!
//! Thin wrappers over the raw ESP-IDF LEDC calls used by
//! [`LedcChannel`](super::ledc_channel::LedcChannel).  All three colour
//! channels share timer 0 in low-speed mode.  On non-espidf targets the
//! helpers are simulation stubs that always succeed.

#[cfg(target_os = "espidf")]
use esp_idf_sys::*;

/// LEDC timer shared by the RGB channels.
pub const LEDC_TIMER_LED: u32 = 0;

pub const LEDC_CH_LED_R: u32 = 0;
pub const LEDC_CH_LED_G: u32 = 1;
pub const LEDC_CH_LED_B: u32 = 2;

/// Configure the shared timer and bind `channel` to `gpio` with 0 % duty.
///
/// Re-configuring the timer with identical settings is harmless, so each
/// channel may call this independently.
#[cfg(target_os = "espidf")]
pub fn ledc_configure(
    channel: u32,
    gpio: i32,
    frequency_hz: u32,
    resolution_bits: u8,
) -> Result<(), i32> {
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: LEDC_TIMER_LED,
        duty_resolution: resolution_bits as ledc_timer_bit_t,
        freq_hz: frequency_hz,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    // SAFETY: Called from the single main-task context during boot,
    // before the HTTP server task exists.
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK as i32 {
        return Err(ret);
    }

    let chan = ledc_channel_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        channel,
        timer_sel: LEDC_TIMER_LED,
        gpio_num: gpio,
        duty: 0,
        hpoint: 0,
        ..Default::default()
    };
    // SAFETY: As above; `chan` outlives the call.
    let ret = unsafe { ledc_channel_config(&chan) };
    if ret != ESP_OK as i32 {
        return Err(ret);
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_configure(
    channel: u32,
    gpio: i32,
    frequency_hz: u32,
    resolution_bits: u8,
) -> Result<(), i32> {
    log::debug!(
        "ledc(sim): ch{} -> GPIO{} @ {} Hz, {}-bit",
        channel,
        gpio,
        frequency_hz,
        resolution_bits
    );
    Ok(())
}

/// Latch a new duty value on `channel`.
#[cfg(target_os = "espidf")]
pub fn ledc_set(channel: u32, duty: u8) -> Result<(), i32> {
    // SAFETY: The channel was configured in ledc_configure(); writes are
    // serialised by the lamp mutex, so only one task touches the duty
    // registers at a time.
    let ret = unsafe {
        ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel, u32::from(duty))
    };
    if ret != ESP_OK as i32 {
        return Err(ret);
    }
    let ret = unsafe { ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel) };
    if ret != ESP_OK as i32 {
        return Err(ret);
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set(_channel: u32, _duty: u8) -> Result<(), i32> {
    Ok(())
}

//! RGB Lamp Firmware — Main Entry Point
//!
//! Hexagonal architecture: a pure colour pipeline wrapped by adapters.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                    │
//! │                                                            │
//! │  WifiApAdapter  HttpAdapter      NvsAdapter   LogEventSink │
//! │  (soft-AP)      (POST /setColor) (ConfigPort) (EventSink)  │
//! │                                                            │
//! │  ────────────── Port Trait Boundary ───────────────        │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │          LampService (pure logic)                │      │
//! │  │  parse · ChannelDriver ──▶ LedcChannel × 3       │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Without an access point in the config the lamp runs standalone: it
//! shows its startup colour and never opens the command endpoint.
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::{Result, anyhow};
use log::{info, warn};

use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::nvs::EspDefaultNvsPartition;

use rgblamp::adapters::http::{self, HttpAdapter};
use rgblamp::adapters::log_sink::LogEventSink;
use rgblamp::adapters::nvs::NvsAdapter;
use rgblamp::adapters::wifi::WifiApAdapter;
use rgblamp::app::service::LampService;
use rgblamp::config::{self, LampConfig};
use rgblamp::drivers::ledc_channel::LedcChannel;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("RGB Lamp v{}", env!("CARGO_PKG_VERSION"));

    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs_partition = EspDefaultNvsPartition::take()?;

    // ── 2. Load config from NVS (or defaults) ─────────────────
    let config = match NvsAdapter::new(nvs_partition.clone()) {
        Ok(mut nvs) => config::load_or_reset(&mut nvs),
        Err(e) => {
            warn!("NVS init failed ({}), running with defaults", e);
            LampConfig::default()
        }
    };

    // ── 3. Channels: configure, blank, startup colour ─────────
    let mut log_sink = LogEventSink::new();
    let channels = LedcChannel::rgb(config.pins.as_array());
    let lamp = LampService::start(channels, &config, &mut log_sink)
        .map_err(|e| anyhow!("LED init failed: {}", e))?;

    // ── 4. Optional command endpoint ──────────────────────────
    let Some(ap) = &config.access_point else {
        info!("No access point configured, running standalone");
        park();
    };

    let _wifi = WifiApAdapter::start(peripherals.modem, sysloop, Some(nvs_partition), ap)?;
    let _http = HttpAdapter::start(http::shared(lamp))?;

    info!("System ready. Waiting for commands.");
    park();
}

/// Requests are served on the HTTP server task; the main task only has
/// to keep the adapters alive.
fn park() -> ! {
    loop {
        std::thread::sleep(std::time::Duration::from_secs(60));
    }
}

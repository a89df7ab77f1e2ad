//! WiFi soft-AP adapter.
//!
//! The lamp opens its own network so clients can reach the command
//! endpoint without any existing infrastructure.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: real ESP-IDF WiFi driver via `esp_idf_svc::wifi`.
//! - **all other targets**: only the pure helpers below are compiled.

use crate::config::AccessPointConfig;

/// Security mode derived from the configured passphrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApSecurity {
    Open,
    Wpa2Personal,
}

impl ApSecurity {
    pub fn for_config(ap: &AccessPointConfig) -> Self {
        if ap.password.is_empty() {
            Self::Open
        } else {
            Self::Wpa2Personal
        }
    }
}

#[cfg(target_os = "espidf")]
pub use esp_impl::WifiApAdapter;

#[cfg(target_os = "espidf")]
mod esp_impl {
    use anyhow::anyhow;
    use esp_idf_svc::eventloop::EspSystemEventLoop;
    use esp_idf_svc::hal::modem::Modem;
    use esp_idf_svc::nvs::EspDefaultNvsPartition;
    use esp_idf_svc::wifi::{
        AccessPointConfiguration, AuthMethod, BlockingWifi, Configuration, EspWifi,
    };
    use log::info;

    use super::ApSecurity;
    use crate::config::AccessPointConfig;

    /// Owns the WiFi driver; dropping it tears the AP down.
    pub struct WifiApAdapter {
        _wifi: BlockingWifi<EspWifi<'static>>,
    }

    impl WifiApAdapter {
        pub fn start(
            modem: Modem,
            sysloop: EspSystemEventLoop,
            nvs: Option<EspDefaultNvsPartition>,
            ap: &AccessPointConfig,
        ) -> anyhow::Result<Self> {
            let mut wifi = BlockingWifi::wrap(EspWifi::new(modem, sysloop.clone(), nvs)?, sysloop)?;

            let auth_method = match ApSecurity::for_config(ap) {
                ApSecurity::Open => AuthMethod::None,
                ApSecurity::Wpa2Personal => AuthMethod::WPA2Personal,
            };
            wifi.set_configuration(&Configuration::AccessPoint(AccessPointConfiguration {
                ssid: ap.ssid.as_str().try_into().map_err(|_| anyhow!("SSID too long"))?,
                password: ap
                    .password
                    .as_str()
                    .try_into()
                    .map_err(|_| anyhow!("password too long"))?,
                channel: ap.channel,
                auth_method,
                ..Default::default()
            }))?;

            wifi.start()?;
            wifi.wait_netif_up()?;

            let ip = wifi.wifi().ap_netif().get_ip_info()?;
            info!(
                "WifiApAdapter: AP '{}' up on channel {} at {}",
                ap.ssid, ap.channel, ip.ip
            );
            Ok(Self { _wifi: wifi })
        }
    }
}

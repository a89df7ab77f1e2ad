//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements     | Connects to                 |
//! |-------------|----------------|-----------------------------|
//! | `hardware`  | ChannelOutput  | any embedded-hal PWM output |
//! | `http`      | (driving side) | EspHttpServer               |
//! | `log_sink`  | EventSink      | Serial log output           |
//! | `nvs`       | ConfigPort     | NVS / in-memory store       |
//! | `wifi`      | —              | ESP-IDF WiFi soft-AP        |
//!
//! The LEDC channel used on the production board lives in
//! [`crate::drivers::ledc_channel`].

pub mod hardware;
pub mod http;
pub mod log_sink;
pub mod nvs;
pub mod wifi;

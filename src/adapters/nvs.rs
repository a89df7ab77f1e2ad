//! NVS (Non-Volatile Storage) adapter.
//!
//! Implements [`ConfigPort`]: the lamp configuration is stored as one
//! postcard blob.  Only configuration lives here; the current colour is
//! never persisted.
//!
//! - Config validation: every save and every load runs
//!   [`LampConfig::validate`].
//! - Atomic writes: ESP-IDF NVS commits are atomic per blob.

use log::info;

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::LampConfig;

#[cfg(not(target_os = "espidf"))]
use std::collections::HashMap;

#[cfg(target_os = "espidf")]
use esp_idf_svc::nvs::{EspDefaultNvsPartition, EspNvs, NvsDefault};

const CONFIG_NAMESPACE: &str = "rgblamp";
const CONFIG_KEY: &str = "lampcfg";

/// Upper bound for the serialized config blob.
const MAX_BLOB_SIZE: usize = 256;

pub struct NvsAdapter {
    #[cfg(target_os = "espidf")]
    nvs: EspNvs<NvsDefault>,
    #[cfg(not(target_os = "espidf"))]
    store: HashMap<&'static str, Vec<u8>>,
}

impl NvsAdapter {
    /// Open the lamp namespace on the default NVS partition.
    #[cfg(target_os = "espidf")]
    pub fn new(partition: EspDefaultNvsPartition) -> Result<Self, ConfigError> {
        let nvs = EspNvs::new(partition, CONFIG_NAMESPACE, true).map_err(|e| {
            log::warn!("NvsAdapter: open '{}' failed: {}", CONFIG_NAMESPACE, e);
            ConfigError::IoError
        })?;
        info!("NvsAdapter: ESP-IDF NVS namespace '{}' open", CONFIG_NAMESPACE);
        Ok(Self { nvs })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Self {
        info!("NvsAdapter: simulation backend");
        Self {
            store: HashMap::new(),
        }
    }

    /// Overwrite the stored blob without validation (simulation only).
    #[cfg(not(target_os = "espidf"))]
    pub fn insert_raw(&mut self, bytes: &[u8]) {
        self.store.insert(CONFIG_KEY, bytes.to_vec());
    }

    #[cfg(target_os = "espidf")]
    fn read_blob(&self) -> Result<Option<Vec<u8>>, ConfigError> {
        let mut buf = [0u8; MAX_BLOB_SIZE];
        match self.nvs.get_raw(CONFIG_KEY, &mut buf) {
            Ok(found) => Ok(found.map(<[u8]>::to_vec)),
            Err(e) => {
                log::warn!("NvsAdapter: NVS read error {}", e);
                Err(ConfigError::IoError)
            }
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_blob(&self) -> Result<Option<Vec<u8>>, ConfigError> {
        Ok(self.store.get(CONFIG_KEY).cloned())
    }

    #[cfg(target_os = "espidf")]
    fn write_blob(&mut self, bytes: &[u8]) -> Result<(), ConfigError> {
        self.nvs.set_raw(CONFIG_KEY, bytes).map(|_| ()).map_err(|e| {
            log::warn!("NvsAdapter: NVS write error {}", e);
            ConfigError::IoError
        })
    }

    #[cfg(not(target_os = "espidf"))]
    fn write_blob(&mut self, bytes: &[u8]) -> Result<(), ConfigError> {
        self.store.insert(CONFIG_KEY, bytes.to_vec());
        Ok(())
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for NvsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPort for NvsAdapter {
    fn load(&self) -> Result<LampConfig, ConfigError> {
        let Some(bytes) = self.read_blob()? else {
            info!("NvsAdapter: no stored config, using defaults");
            return Ok(LampConfig::default());
        };
        let cfg: LampConfig = postcard::from_bytes(&bytes).map_err(|_| ConfigError::Corrupted)?;
        cfg.validate()?;
        info!("NvsAdapter: loaded config ({} bytes)", bytes.len());
        Ok(cfg)
    }

    fn save(&mut self, config: &LampConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let bytes = postcard::to_allocvec(config).map_err(|_| ConfigError::IoError)?;
        if bytes.len() > MAX_BLOB_SIZE {
            return Err(ConfigError::ValidationFailed("config blob too large"));
        }
        self.write_blob(&bytes)?;
        info!("NvsAdapter: config saved ({} bytes)", bytes.len());
        Ok(())
    }
}

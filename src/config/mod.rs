//! Configuration schema for media key integration.
//!
//! Defines the media key configuration structure, its defaults and
//! TOML loading. All fields have sensible defaults, so an empty or
//! partial file is valid.

mod error;
#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default key name for the volume up binding.
pub const DEFAULT_VOLUME_UP_KEY: &str = "XF86AudioRaiseVolume";

/// Default key name for the volume down binding.
pub const DEFAULT_VOLUME_DOWN_KEY: &str = "XF86AudioLowerVolume";

/// Default key name for the next station binding.
pub const DEFAULT_NEXT_STATION_KEY: &str = "XF86AudioNext";

/// Default key name for the previous station binding.
pub const DEFAULT_PREVIOUS_STATION_KEY: &str = "XF86AudioPrev";

/// Media key configuration.
///
/// Controls whether the four extra key bindings are installed, which
/// key names they respond to, and which service name variant to use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaKeysConfig {
    /// Whether the volume and station key bindings are installed.
    /// Built-in Play/Stop handling is always active.
    pub key_mapping: bool,

    /// Key name bound to the volume up command.
    pub volume_up_key: String,

    /// Key name bound to the volume down command.
    pub volume_down_key: String,

    /// Key name bound to the next station command.
    pub next_station_key: String,

    /// Key name bound to the previous station command.
    pub previous_station_key: String,

    /// Forces the legacy service name when set, overriding desktop
    /// environment detection. Absence means detect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_legacy_service_name: Option<bool>,
}

impl Default for MediaKeysConfig {
    fn default() -> Self {
        Self {
            key_mapping: true,
            volume_up_key: DEFAULT_VOLUME_UP_KEY.to_string(),
            volume_down_key: DEFAULT_VOLUME_DOWN_KEY.to_string(),
            next_station_key: DEFAULT_NEXT_STATION_KEY.to_string(),
            previous_station_key: DEFAULT_PREVIOUS_STATION_KEY.to_string(),
            use_legacy_service_name: None,
        }
    }
}

impl MediaKeysConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })
    }
}

use std::collections::HashMap;

use tracing::info;

use crate::config::MediaKeysConfig;

use super::KeyCommand;

/// Configured key-name to playback-command bindings.
///
/// Built once from configuration at service startup and immutable
/// afterwards. Key names are stored lower-cased; lookups lower-case
/// the incoming name, so matching is case-insensitive.
pub(super) struct KeyMap {
    bindings: HashMap<String, KeyCommand>,
    enabled: bool,
}

impl KeyMap {
    /// Build the bindings from configuration.
    ///
    /// When key mapping is disabled the map is left empty; the
    /// built-in Play/Stop handling is unaffected by this.
    pub(super) fn from_config(config: &MediaKeysConfig) -> Self {
        if !config.key_mapping {
            return Self {
                bindings: HashMap::new(),
                enabled: false,
            };
        }

        let mut bindings = HashMap::new();
        bindings.insert(config.volume_up_key.to_lowercase(), KeyCommand::VolumeUp);
        bindings.insert(config.volume_down_key.to_lowercase(), KeyCommand::VolumeDown);
        bindings.insert(config.next_station_key.to_lowercase(), KeyCommand::NextStation);
        bindings.insert(
            config.previous_station_key.to_lowercase(),
            KeyCommand::PreviousStation,
        );

        info!(
            "mapping volume up/down to: {}, {}",
            config.volume_up_key, config.volume_down_key
        );
        info!(
            "mapping station previous/next to: {}, {}",
            config.previous_station_key, config.next_station_key
        );

        Self {
            bindings,
            enabled: true,
        }
    }

    /// Whether the extra key bindings are installed
    pub(super) fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Look up the command bound to a key name, case-insensitively
    pub(super) fn lookup(&self, key: &str) -> Option<KeyCommand> {
        self.bindings.get(&key.to_lowercase()).copied()
    }
}

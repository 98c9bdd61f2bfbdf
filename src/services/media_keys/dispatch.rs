use std::sync::Arc;

use tracing::{debug, error};
use zbus::zvariant::Value;

use super::{MediaControl, PlaybackState, keymap::KeyMap, types::KeyCommand};

/// Routes incoming key press events to playback commands.
///
/// Invoked once per incoming bus signal, synchronously, on the
/// listener task. At most one command is invoked per event.
pub(super) struct Dispatcher {
    controller: Arc<dyn MediaControl>,
    keymap: KeyMap,
}

impl Dispatcher {
    pub(super) fn new(controller: Arc<dyn MediaControl>, keymap: KeyMap) -> Self {
        Self { controller, keymap }
    }

    /// Handle one key press event, given as the signal's body fields.
    ///
    /// Expects exactly two fields with the key name as the second; any
    /// other shape is malformed and dropped. "Stop" and "Play" are
    /// matched exactly, mapped keys case-insensitively.
    pub(super) fn handle_event(&self, args: &[Value<'_>]) {
        if args.len() != 2 {
            error!("media key signal invalid, ignoring event");
            return;
        }

        let key = match &args[1] {
            Value::Str(key) => key.as_str(),
            _ => {
                error!("failed to extract media key information, ignoring event");
                return;
            }
        };

        debug!("media key pressed: {key}");

        if key == "Stop" {
            self.controller.stop();
            return;
        }

        if key == "Play" {
            if self.controller.playback_state() == PlaybackState::Stopped {
                self.controller.play();
            } else {
                self.controller.stop();
            }
            return;
        }

        if self.keymap.is_enabled() {
            if let Some(command) = self.keymap.lookup(key) {
                self.invoke(command);
                return;
            }
        }

        debug!("ignoring {key}");
    }

    fn invoke(&self, command: KeyCommand) {
        match command {
            KeyCommand::VolumeUp => self.controller.volume_up(),
            KeyCommand::VolumeDown => self.controller.volume_down(),
            KeyCommand::NextStation => self.controller.next_station(),
            KeyCommand::PreviousStation => self.controller.previous_station(),
        }
    }
}

use std::fmt;
use std::process;

use tracing::warn;

/// Current playback state of the controlled player
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackState {
    /// Player is currently playing
    Playing,

    /// Player is paused
    Paused,

    /// Player is stopped
    Stopped,
}

impl From<&str> for PlaybackState {
    fn from(status: &str) -> Self {
        match status {
            "Playing" => Self::Playing,
            "Paused" => Self::Paused,
            _ => Self::Stopped,
        }
    }
}

/// Playback command a configured media key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Raise the playback volume
    VolumeUp,

    /// Lower the playback volume
    VolumeDown,

    /// Switch to the next station
    NextStation,

    /// Switch to the previous station
    PreviousStation,
}

/// Process-qualified identifier used to claim the media key grab.
///
/// Formatted as `<application-name>-<pid>`, computed once at service
/// startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Build the identifier for this process from an application name
    pub fn new(app_name: &str) -> Self {
        Self(format!("{app_name}-{}", process::id()))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two known media key service names to talk to.
///
/// GNOME sessions expose the service under the MediaKeys name; older
/// daemons on other desktops registered it under the bare daemon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceVariant {
    /// `org.gnome.SettingsDaemon.MediaKeys`
    Current,

    /// `org.gnome.SettingsDaemon`
    Legacy,
}

impl ServiceVariant {
    /// Select the service name for this session.
    ///
    /// An explicit configuration override wins. Otherwise the
    /// `XDG_CURRENT_DESKTOP` environment variable decides: a readable
    /// value that does not mention GNOME selects the legacy name.
    pub fn detect(use_legacy: Option<bool>) -> Self {
        Self::select(
            use_legacy,
            std::env::var("XDG_CURRENT_DESKTOP").ok().as_deref(),
        )
    }

    fn select(use_legacy: Option<bool>, desktop: Option<&str>) -> Self {
        match use_legacy {
            Some(true) => Self::Legacy,
            Some(false) => Self::Current,
            None => match desktop {
                Some(desktop) if !desktop.to_lowercase().contains("gnome") => Self::Legacy,
                Some(_) => Self::Current,
                None => {
                    warn!("could not read XDG_CURRENT_DESKTOP environment variable");
                    Self::Current
                }
            },
        }
    }

    /// D-Bus service name for this variant
    pub fn bus_name(&self) -> &'static str {
        match self {
            Self::Current => "org.gnome.SettingsDaemon.MediaKeys",
            Self::Legacy => "org.gnome.SettingsDaemon",
        }
    }
}

#![allow(missing_docs)]

use zbus::{Result, proxy};

/// Settings daemon media key interface proxy
///
/// Provides the grab/release registration calls and the key press
/// signal. The service name is not fixed here: the daemon is reachable
/// under two different names depending on the desktop, so the
/// destination is supplied when the proxy is built.
#[proxy(
    interface = "org.gnome.SettingsDaemon.MediaKeys",
    default_path = "/org/gnome/SettingsDaemon/MediaKeys"
)]
pub trait MediaKeys {
    /// Claim exclusive delivery of media key presses for an application
    #[zbus(no_reply, no_autostart)]
    fn grab_media_player_keys(&self, application: &str, time: u32) -> Result<()>;

    /// Release a previously claimed grab
    #[zbus(no_reply, no_autostart)]
    fn release_media_player_keys(&self, application: &str) -> Result<()>;

    /// Signal emitted when a grabbed media key is pressed
    #[zbus(signal)]
    fn media_player_key_pressed(&self, application: &str, key: &str) -> Result<()>;
}

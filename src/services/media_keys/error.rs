/// Errors that can occur while setting up media key handling.
///
/// These never cross the service boundary: every failure is absorbed
/// and logged, and the application keeps running without key support.
#[derive(thiserror::Error, Debug)]
pub enum MediaKeysError {
    /// Session bus endpoint could not be reached
    #[error("session bus connection failed: {0}")]
    ConnectionFailed(String),

    /// D-Bus communication error
    #[error("D-Bus operation failed: {0}")]
    Dbus(#[from] zbus::Error),
}

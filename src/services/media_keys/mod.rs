/// Playback-engine control seam
pub mod control;
/// Media key error types
pub mod error;
/// D-Bus proxy trait definitions
pub mod proxy;
/// Media key service lifecycle
pub mod service;
/// Core media key types
pub mod types;

mod dispatch;
mod keymap;
mod listener;

pub use control::*;
pub use error::*;
pub use proxy::*;
pub use service::*;
pub use types::*;

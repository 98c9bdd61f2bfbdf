//! Radiokeys - session media key integration for desktop media players.
//!
//! Radiokeys binds an application to the desktop session's media key
//! service so hardware Play/Stop and the configured volume and station
//! keys drive playback. The playback engine stays on the application
//! side, behind the [`MediaControl`] trait; this crate owns the bus
//! registration, the listener task and the key routing.
//!
//! Media key support is strictly best-effort: when the session bus or
//! the daemon is unavailable the service starts and shuts down
//! normally, the keys just do nothing.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use radiokeys::{MediaControl, MediaKeysConfig, MediaKeysService, PlaybackState};
//!
//! struct Player;
//!
//! impl MediaControl for Player {
//!     fn play(&self) {}
//!     fn stop(&self) {}
//!     fn playback_state(&self) -> PlaybackState {
//!         PlaybackState::Stopped
//!     }
//!     fn volume_up(&self) {}
//!     fn volume_down(&self) {}
//!     fn next_station(&self) {}
//!     fn previous_station(&self) {}
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = MediaKeysConfig::default();
//!     let service = MediaKeysService::start("myplayer", &config, Arc::new(Player)).await;
//!
//!     // ... run the application ...
//!
//!     service.shutdown().await;
//! }
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Media key service and its collaborators.
pub mod services;

/// Tracing subscriber setup for host applications.
pub mod tracing_config;

pub use config::{ConfigError, MediaKeysConfig};
pub use services::media_keys::{MediaControl, MediaKeysService, PlaybackState};

/// Session media key integration service
pub mod media_keys;

pub use media_keys::{
    ApplicationId, MediaControl, MediaKeysError, MediaKeysService, PlaybackState, ServiceVariant,
};

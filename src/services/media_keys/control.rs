use super::PlaybackState;

/// Playback-engine seam consumed by the media key service.
///
/// All commands are fire-and-forget: the service never inspects a
/// result, it only triggers the action. Implementations are invoked
/// from the listener task and must be safe to call from there.
pub trait MediaControl: Send + Sync {
    /// Start playback
    fn play(&self);

    /// Stop playback
    fn stop(&self);

    /// Current playback state
    fn playback_state(&self) -> PlaybackState;

    /// Raise the playback volume
    fn volume_up(&self);

    /// Lower the playback volume
    fn volume_down(&self);

    /// Switch to the next station
    fn next_station(&self);

    /// Switch to the previous station
    fn previous_station(&self);
}

use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::MediaKeysConfig;

use super::{
    ApplicationId, MediaControl, ServiceVariant,
    dispatch::Dispatcher,
    keymap::KeyMap,
    listener::{self, BusTarget},
};

/// Session media key service.
///
/// Owns the single background listener task that holds the media key
/// grab. Construction waits until the listener has either registered
/// or given up; [`shutdown`](Self::shutdown) waits until the grab is
/// released and the task has exited. No failure propagates to the
/// caller: when the bus is unreachable the service stays alive but
/// hardware keys simply do nothing.
pub struct MediaKeysService {
    app_id: ApplicationId,
    shutdown_tx: Option<oneshot::Sender<()>>,
    listener_handle: Option<JoinHandle<()>>,
}

impl MediaKeysService {
    /// Start media key handling for an application.
    ///
    /// Builds the key bindings from configuration, selects the
    /// service name variant, spawns the listener task and waits for
    /// its readiness signal before returning.
    pub async fn start(
        app_name: &str,
        config: &MediaKeysConfig,
        controller: Arc<dyn MediaControl>,
    ) -> Self {
        Self::start_on(BusTarget::Session, app_name, config, controller).await
    }

    pub(super) async fn start_on(
        target: BusTarget,
        app_name: &str,
        config: &MediaKeysConfig,
        controller: Arc<dyn MediaControl>,
    ) -> Self {
        let app_id = ApplicationId::new(app_name);
        let variant = ServiceVariant::detect(config.use_legacy_service_name);
        let dispatcher = Dispatcher::new(controller, KeyMap::from_config(config));

        info!(
            "starting media key listener for {app_id} using {}",
            variant.bus_name()
        );

        let (ready_tx, ready_rx) = oneshot::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let listener_handle = tokio::spawn(listener::run(
            target,
            variant,
            app_id.clone(),
            dispatcher,
            ready_tx,
            shutdown_rx,
        ));

        // Readiness always arrives, grab or no grab. A dropped sender
        // means the task is already gone, which is ready enough.
        let _ = ready_rx.await;

        Self {
            app_id,
            shutdown_tx: Some(shutdown_tx),
            listener_handle: Some(listener_handle),
        }
    }

    /// Process-qualified identifier used to claim the grab
    pub fn application_id(&self) -> &ApplicationId {
        &self.app_id
    }

    /// Stop media key handling.
    ///
    /// Signals the listener task, which releases its registration, and
    /// waits for the task to exit. After this returns no background
    /// task of this service is left running.
    pub async fn shutdown(mut self) {
        info!("stopping media key listener");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }

        if let Some(handle) = self.listener_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for MediaKeysService {
    fn drop(&mut self) {
        // Joining is only possible in shutdown(); a plain drop still
        // signals the listener so it releases the grab on its own.
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::services::media_keys::PlaybackState;

    #[derive(Default)]
    struct CountingControl {
        commands: AtomicUsize,
    }

    impl MediaControl for CountingControl {
        fn play(&self) {
            self.commands.fetch_add(1, Ordering::SeqCst);
        }

        fn stop(&self) {
            self.commands.fetch_add(1, Ordering::SeqCst);
        }

        fn playback_state(&self) -> PlaybackState {
            PlaybackState::Stopped
        }

        fn volume_up(&self) {
            self.commands.fetch_add(1, Ordering::SeqCst);
        }

        fn volume_down(&self) {
            self.commands.fetch_add(1, Ordering::SeqCst);
        }

        fn next_station(&self) {
            self.commands.fetch_add(1, Ordering::SeqCst);
        }

        fn previous_station(&self) {
            self.commands.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn unreachable_bus() -> BusTarget {
        BusTarget::Address("unix:path=/nonexistent/radiokeys-test-socket".to_string())
    }

    #[tokio::test]
    async fn start_returns_even_when_bus_is_unreachable() {
        let control = Arc::new(CountingControl::default());

        let service = tokio::time::timeout(
            Duration::from_secs(5),
            MediaKeysService::start_on(
                unreachable_bus(),
                "radiokeys-test",
                &MediaKeysConfig::default(),
                Arc::clone(&control) as Arc<dyn MediaControl>,
            ),
        )
        .await
        .unwrap();

        assert_eq!(control.commands.load(Ordering::SeqCst), 0);

        service.shutdown().await;
    }

    #[tokio::test]
    async fn shutdown_joins_the_listener_task() {
        let control = Arc::new(CountingControl::default());
        let service = MediaKeysService::start_on(
            unreachable_bus(),
            "radiokeys-test",
            &MediaKeysConfig::default(),
            control as Arc<dyn MediaControl>,
        )
        .await;

        tokio::time::timeout(Duration::from_secs(5), service.shutdown())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn dropping_without_shutdown_does_not_hang() {
        let control = Arc::new(CountingControl::default());
        let service = MediaKeysService::start_on(
            unreachable_bus(),
            "radiokeys-test",
            &MediaKeysConfig::default(),
            control as Arc<dyn MediaControl>,
        )
        .await;

        drop(service);
    }

    #[tokio::test]
    async fn application_id_is_process_qualified() {
        let control = Arc::new(CountingControl::default());
        let service = MediaKeysService::start_on(
            unreachable_bus(),
            "radiokeys-test",
            &MediaKeysConfig::default(),
            control as Arc<dyn MediaControl>,
        )
        .await;

        assert!(
            service
                .application_id()
                .as_str()
                .starts_with("radiokeys-test-")
        );

        service.shutdown().await;
    }
}

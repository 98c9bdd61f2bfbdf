use futures::StreamExt;
use tokio::sync::oneshot;
use tracing::{debug, error};
use zbus::proxy::SignalStream;
use zbus::zvariant::Structure;
use zbus::{Connection, connection};

use super::{ApplicationId, MediaKeysError, MediaKeysProxy, ServiceVariant, dispatch::Dispatcher};

const KEY_PRESSED_SIGNAL: &str = "MediaPlayerKeyPressed";

/// Which bus endpoint the listener connects to.
///
/// The session bus is the only real target; an explicit address lets
/// tests point the listener at an unreachable endpoint.
pub(super) enum BusTarget {
    /// The user's session bus
    Session,

    /// An explicit bus address
    #[cfg_attr(not(test), allow(dead_code))]
    Address(String),
}

/// Body of the listener task.
///
/// Connects, claims the grab, signals readiness, then processes key
/// press signals until shutdown is requested. The grab is released and
/// the connection dropped before the task returns. Readiness is always
/// signaled, even when the connection fails, so startup never hangs.
pub(super) async fn run(
    target: BusTarget,
    variant: ServiceVariant,
    app_id: ApplicationId,
    dispatcher: Dispatcher,
    ready_tx: oneshot::Sender<()>,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    let (connection, proxy, mut key_events) = match subscribe(&target, variant).await {
        Ok(subscription) => subscription,
        Err(e) => {
            error!("could not connect to the media key service, media keys disabled: {e}");
            let _ = ready_tx.send(());
            return;
        }
    };

    // Best-effort grab; the outcome is not checked. A rejected grab is
    // indistinguishable from success until key events fail to arrive.
    let _ = proxy.grab_media_player_keys(app_id.as_str(), 0).await;

    let _ = ready_tx.send(());

    loop {
        tokio::select! {
            _ = &mut shutdown_rx => break,
            maybe_msg = key_events.next() => match maybe_msg {
                Some(msg) => handle_message(&dispatcher, &msg),
                None => {
                    debug!("media key signal stream closed");
                    let _ = (&mut shutdown_rx).await;
                    break;
                }
            },
        }
    }

    let _ = proxy.release_media_player_keys(app_id.as_str()).await;
    drop(connection);
}

async fn subscribe(
    target: &BusTarget,
    variant: ServiceVariant,
) -> Result<(Connection, MediaKeysProxy<'static>, SignalStream<'static>), MediaKeysError> {
    let connection = match target {
        BusTarget::Session => Connection::session()
            .await
            .map_err(|e| MediaKeysError::ConnectionFailed(e.to_string()))?,
        BusTarget::Address(address) => connection::Builder::address(address.as_str())
            .map_err(|e| MediaKeysError::ConnectionFailed(e.to_string()))?
            .build()
            .await
            .map_err(|e| MediaKeysError::ConnectionFailed(e.to_string()))?,
    };

    let proxy = MediaKeysProxy::builder(&connection)
        .destination(variant.bus_name())?
        .build()
        .await?;

    // Raw signal stream rather than the typed one: malformed bodies
    // must reach the dispatcher's validation instead of being silently
    // skipped by argument deserialization.
    let key_events = proxy.inner().receive_signal(KEY_PRESSED_SIGNAL).await?;

    Ok((connection, proxy, key_events))
}

fn handle_message(dispatcher: &Dispatcher, message: &zbus::Message) {
    let body = message.body();
    match body.deserialize::<Structure<'_>>() {
        Ok(args) => dispatcher.handle_event(args.fields()),
        Err(e) => error!("media key signal invalid, ignoring event: {e}"),
    }
}

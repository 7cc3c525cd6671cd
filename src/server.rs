use std::{io, net::SocketAddr, sync::Arc, time::Duration};

use axum::{Extension, Router, routing::get};
use tokio::{
    net::TcpListener,
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

use crate::{
    Error, Result,
    api::{self, CallbackContext},
    management::LocalStore,
    spotify::{Session, SpotifyClient},
};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Handle on the running callback server.
#[derive(Debug)]
pub struct CallbackListener {
    addr: SocketAddr,
    completion: oneshot::Receiver<SpotifyClient>,
    failures: mpsc::Receiver<Error>,
    shutdown: oneshot::Sender<()>,
    server: JoinHandle<()>,
}

/// Binds the callback server and starts serving it in the background.
///
/// Returns as soon as the socket is bound, so the caller can open the
/// browser knowing the redirect has somewhere to land.
///
/// # Errors
///
/// Returns [`Error::Io`] if the configured address cannot be bound.
pub async fn start_callback_listener(
    session: Arc<Session>,
    store: LocalStore,
) -> Result<CallbackListener> {
    let address = session.config().server_address.clone();
    let listener = TcpListener::bind(address.as_str())
        .await
        .map_err(|e| io::Error::new(e.kind(), format!("cannot bind {address}: {e}")))?;
    let addr = listener.local_addr()?;

    let (completion_tx, completion) = oneshot::channel();
    let (failures_tx, failures) = mpsc::channel(1);
    let (shutdown, shutdown_rx) = oneshot::channel::<()>();

    let context = CallbackContext::new(session, store, completion_tx, failures_tx);
    let app = Router::new()
        .route("/callback", get(api::callback))
        .fallback(api::fallback)
        .layer(Extension(context));

    let server = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
        };
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!(error = %e, "callback server stopped");
        }
    });

    tracing::debug!(%addr, "callback listener bound");
    Ok(CallbackListener {
        addr,
        completion,
        failures,
        shutdown,
        server,
    })
}

impl CallbackListener {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Waits for the redirect to be handled.
    ///
    /// Resolves with the authenticated client delivered by the callback, or
    /// with the failure that ended the login. There is no timeout. The server
    /// is shut down gracefully before returning so the browser still receives
    /// the final response.
    pub async fn wait(mut self) -> Result<SpotifyClient> {
        let outcome = tokio::select! {
            Ok(client) = &mut self.completion => Ok(client),
            Some(err) = self.failures.recv() => Err(err),
            else => Err(Error::ListenerClosed),
        };

        let _ = self.shutdown.send(());
        if tokio::time::timeout(SHUTDOWN_GRACE, self.server).await.is_err() {
            tracing::debug!("callback server did not stop in time");
        }

        outcome
    }
}

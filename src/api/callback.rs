use std::sync::Arc;

use axum::{Extension, extract::Query, http::StatusCode};
use serde::Deserialize;
use tokio::sync::{Mutex, OwnedMutexGuard, mpsc, oneshot};

use crate::{Error, management::LocalStore, spotify::Session, spotify::SpotifyClient};

const LOGIN_COMPLETED: &str = "Login Completed!";
const ALREADY_COMPLETED: &str = "Login already completed.";
const NOT_FOUND: &str = "404 page not found";
const TOKEN_FAILED: &str = "Couldn't get token";
const MISSING_CODE: &str = "Missing authorization code";

type Reply = (StatusCode, &'static str);

#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// Where the single login attempt stands.
#[derive(Debug)]
enum Completion {
    Waiting(oneshot::Sender<SpotifyClient>),
    Completed,
    Failed,
}

/// State shared by every request the callback server handles.
///
/// The completion sender sits behind a mutex so the first request that gets
/// through takes it and no later request can deliver a second client. Later
/// requests wait for that one to finish and are answered with its outcome.
/// Failures travel on their own channel and never touch the sender.
#[derive(Debug, Clone)]
pub struct CallbackContext {
    session: Arc<Session>,
    store: LocalStore,
    completion: Arc<Mutex<Completion>>,
    failures: mpsc::Sender<Error>,
}

impl CallbackContext {
    pub fn new(
        session: Arc<Session>,
        store: LocalStore,
        completion: oneshot::Sender<SpotifyClient>,
        failures: mpsc::Sender<Error>,
    ) -> Self {
        Self {
            session,
            store,
            completion: Arc::new(Mutex::new(Completion::Waiting(completion))),
            failures,
        }
    }

    fn fail(&self, err: Error) {
        tracing::warn!(error = %err, "login failed");
        // Only the first failure matters, the login flow stops on it.
        let _ = self.failures.try_send(err);
    }
}

pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(ctx): Extension<CallbackContext>,
) -> Reply {
    if !ctx.session.verify_state(params.state.as_deref()) {
        ctx.fail(Error::StateMismatch {
            received: params.state,
        });
        return (StatusCode::NOT_FOUND, NOT_FOUND);
    }
    tracing::debug!("state validated");

    if let Some(reason) = params.error {
        ctx.fail(Error::AuthorizationDenied(reason));
        return (StatusCode::FORBIDDEN, TOKEN_FAILED);
    }

    let Some(code) = params.code else {
        ctx.fail(Error::MissingCode);
        return (StatusCode::BAD_REQUEST, MISSING_CODE);
    };

    let mut slot = Arc::clone(&ctx.completion).lock_owned().await;
    let sender = match std::mem::replace(&mut *slot, Completion::Failed) {
        Completion::Waiting(sender) => sender,
        Completion::Completed => {
            *slot = Completion::Completed;
            return (StatusCode::OK, ALREADY_COMPLETED);
        }
        Completion::Failed => return (StatusCode::FORBIDDEN, TOKEN_FAILED),
    };

    // The browser may hang up while the code is exchanged. The exchange runs
    // detached from the connection so its outcome always reaches the login.
    let task = tokio::spawn(finish_login(ctx.clone(), code, sender, slot));
    match task.await {
        Ok(reply) => reply,
        Err(e) => {
            ctx.fail(Error::ListenerClosed);
            tracing::error!(error = %e, "login task aborted");
            (StatusCode::INTERNAL_SERVER_ERROR, TOKEN_FAILED)
        }
    }
}

/// Exchanges the code, persists the token and delivers the client.
///
/// Holds the completion slot for its whole run; the slot is left `Failed`
/// unless every step succeeds.
async fn finish_login(
    ctx: CallbackContext,
    code: String,
    sender: oneshot::Sender<SpotifyClient>,
    mut slot: OwnedMutexGuard<Completion>,
) -> Reply {
    let token = match ctx.session.exchange_code(&code).await {
        Ok(token) => token,
        Err(e) => {
            ctx.fail(e);
            return (StatusCode::FORBIDDEN, TOKEN_FAILED);
        }
    };
    tracing::debug!("token exchanged");

    if let Err(e) = ctx.store.save_token(&token).await {
        ctx.fail(e);
        return (StatusCode::INTERNAL_SERVER_ERROR, TOKEN_FAILED);
    }
    tracing::debug!(path = %ctx.store.token_path().display(), "token persisted");

    if sender.send(ctx.session.client(token)).is_err() {
        tracing::warn!("nobody is waiting for the login to complete");
    }
    *slot = Completion::Completed;

    (StatusCode::OK, LOGIN_COMPLETED)
}

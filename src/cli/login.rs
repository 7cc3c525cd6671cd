use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    browser::Browser,
    cli::print_json,
    config::Config,
    management::LocalStore,
    server,
    spotify::Session,
    success,
    types::User,
};

/// Runs the authorization-code login.
///
/// Binds the callback server, opens the authorization URL, then blocks until
/// the callback delivers an authenticated client (the token file is written
/// by the callback itself). Finally fetches the user's profile and stores it
/// next to the token.
///
/// # Login Stages
///
/// `listener bound → browser opened → awaiting redirect → state validated →
/// token exchanged → persisted`. Any failure ends the login for good.
///
/// # Errors
///
/// Missing credentials, a failed bind or browser launch, a state mismatch,
/// a rejected code exchange or a failed `/me` lookup.
pub async fn login(config: &Config, browser: &dyn Browser, json: bool) -> Result<User> {
    let session = Arc::new(Session::new(config.clone())?);
    let store = LocalStore::from_config(config);

    let listener = server::start_callback_listener(Arc::clone(&session), store.clone()).await?;

    let auth_url = session.authorize_url()?;
    browser.open(auth_url.as_str())?;
    tracing::debug!("browser opened");

    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for authorization in the browser...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    tracing::debug!("awaiting redirect");
    let client = listener.wait().await;
    pb.finish_and_clear();
    let client = client?;

    let user = client.current_user().await?;
    store.save_user(&user).await?;
    tracing::debug!(path = %store.user_path().display(), "user persisted");

    if json {
        print_json(&user)?;
    } else {
        success!("Logged in as: {}", user.id);
    }

    Ok(user)
}

//! Error type shared by every command.
//!
//! All failures end the process, but not all of them mean the same thing to the
//! person at the shell. Input problems (a bad flag value, missing credentials, no
//! stored login) exit with code 2, everything else with code 1.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Spotify API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("No stored login at {}. Please run spoti login", path.display())]
    NotLoggedIn { path: PathBuf },

    #[error("Cannot parse {}: {source}", path.display())]
    CorruptFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to open browser ({reason}). Please navigate to the following URL manually: {url}")]
    Browser { url: String, reason: String },

    #[error("State mismatch: received {received:?}")]
    StateMismatch { received: Option<String> },

    #[error("Authorization denied by Spotify: {0}")]
    AuthorizationDenied(String),

    #[error("Callback request is missing the authorization code")]
    MissingCode,

    #[error("Couldn't get token: {0}")]
    TokenExchange(String),

    #[error("Refusing to follow pagination link {0}")]
    Pagination(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Callback listener stopped before a login completed")]
    ListenerClosed,
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Validation(_) | Error::Config(_) | Error::NotLoggedIn { .. } => 2,
            _ => 1,
        }
    }
}

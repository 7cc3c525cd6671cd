//! Configuration management for the Spotify CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value is read exactly once at process start
//! into a [`Config`] that the commands receive by reference.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{Error, Result};

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/callback";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_SCOPE: &str =
    "user-read-private playlist-read-private playlist-modify-public playlist-modify-private";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_FILE: &str = "token.json";
pub const DEFAULT_USER_FILE: &str = "user.json";

/// Loads environment variables from `.env` files.
///
/// The `.env` in the working directory is read first, then the one in the
/// platform-specific local data directory under `spoti/.env`. Variables that
/// are already set are never overwritten, so the real environment always wins
/// and the working directory beats the data directory. Missing files are fine.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spoti/.env`
/// - macOS: `~/Library/Application Support/spoti/.env`
/// - Windows: `%LOCALAPPDATA%/spoti/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or if an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<()> {
    let local = PathBuf::from(".env");
    if local.is_file() {
        dotenv::from_path(&local).map_err(|e| Error::Config(e.to_string()))?;
    }

    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Config(e.to_string()))?;
    }

    Ok(())
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spoti/.env");
    path
}

/// Runtime configuration of one process run.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub server_address: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub token_file: PathBuf,
    pub user_file: PathBuf,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_lookup(|key| match key {
    ///     "SPOTIFY_ID" => Some("abc".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.client_id.as_deref(), Some("abc"));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Self {
            client_id: get("SPOTIFY_ID"),
            client_secret: get("SPOTIFY_SECRET"),
            redirect_uri: or("SPOTIFY_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            server_address: or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            scope: or("SPOTIFY_SCOPE", DEFAULT_SCOPE),
            auth_url: or("SPOTIFY_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: or("SPOTIFY_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: or("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            token_file: PathBuf::from(or("SPOTI_TOKEN_FILE", DEFAULT_TOKEN_FILE)),
            user_file: PathBuf::from(or("SPOTI_USER_FILE", DEFAULT_USER_FILE)),
        }
    }

    /// Returns the client id and secret needed for the login flow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first missing variable.
    pub fn credentials(&self) -> Result<(&str, &str)> {
        let id = self
            .client_id
            .as_deref()
            .ok_or_else(|| Error::Config("SPOTIFY_ID must be set".to_string()))?;
        let secret = self
            .client_secret
            .as_deref()
            .ok_or_else(|| Error::Config("SPOTIFY_SECRET must be set".to_string()))?;
        Ok((id, secret))
    }
}

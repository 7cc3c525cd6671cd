//! # CLI Module
//!
//! The command-line layer of `spoti`: argument definitions and one function per
//! subcommand. Each command follows the same sequence:
//!
//! 1. **Validation**: required flags are enforced by clap before anything runs;
//!    values clap can't check (track IDs, blank names) are checked first thing
//! 2. **Token Loading**: every command except `login` and `me` loads the stored
//!    token and fails if there is none
//! 3. **API Interaction**: one or more calls through [`crate::spotify::SpotifyClient`]
//! 4. **Output**: plain text (tables for listings) or, with `--json`, the raw
//!    response objects
//!
//! Every failure is returned as a [`crate::Error`]; `main` prints it and exits
//! with the matching code. Nothing is retried.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spoti login
//! spoti me
//! spoti search --query "daft punk"
//! spoti playlist list
//! spoti playlist details --playlistID 37i9dQZF1DXcBWIGoYBM5M
//! spoti playlist create --name "Road Trip"
//! spoti playlist add-tracks -p 37i9dQZF1DXcBWIGoYBM5M -t 4uLU6hMCjMI75M1A2tKUQC -t 0VjIjW4GlUZAMYd2vXMi3b
//! ```

mod args;
mod login;
mod me;
mod playlist;
mod search;

use std::io;

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use serde::Serialize;

pub use args::{
    Cli, Command, CompletionsOption, CreatePlaylistOptions, PlaylistCommand, PlaylistIdOption,
    PlaylistTracksOptions, SearchOptions,
};
pub use login::login;
pub use me::{me, render_user};
pub use playlist::{
    add_tracks, create_playlist, list_playlists, playlist_details, remove_tracks,
    render_playlist, render_playlist_tracks,
};
pub use search::{render_tracks, search};

use crate::{
    Result, browser::SystemBrowser, config::Config, management::LocalStore,
    spotify::SpotifyClient, types::Token, warning,
};

/// Dispatches a parsed command line to its command.
pub async fn run(cli: Cli, config: &Config) -> Result<()> {
    let json = cli.json;

    match cli.command {
        Command::Login => login(config, &SystemBrowser, json).await.map(drop),
        Command::Me => me(config, json).await.map(drop),
        Command::Search(opt) => search(config, &opt.query, opt.limit, json)
            .await
            .map(drop),
        Command::Playlist(cmd) => match cmd {
            PlaylistCommand::List => list_playlists(config, json).await.map(drop),
            PlaylistCommand::Details(opt) => playlist_details(config, &opt.playlist_id, json)
                .await
                .map(drop),
            PlaylistCommand::Create(opt) => {
                create_playlist(config, &opt.name, &opt.description, !opt.private, json)
                    .await
                    .map(drop)
            }
            PlaylistCommand::AddTracks(opt) => {
                add_tracks(config, &opt.playlist_id, &opt.track_ids, json)
                    .await
                    .map(drop)
            }
            PlaylistCommand::RemoveTracks(opt) => {
                remove_tracks(config, &opt.playlist_id, &opt.track_ids, json)
                    .await
                    .map(drop)
            }
        },
        Command::Completions(opt) => {
            completions(opt.shell);
            Ok(())
        }
    }
}

/// Writes the completion script for `shell` to stdout.
pub fn completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Loads the stored token and wraps it in an API client.
///
/// An expired token is still used (there is no refresh), but the user is
/// told to log in again.
pub(crate) async fn authenticated(config: &Config) -> Result<SpotifyClient> {
    let token = LocalStore::from_config(config).load_token().await?;
    if let Some(notice) = expiry_notice(&token) {
        warning!("{}", notice);
    }
    Ok(SpotifyClient::new(&config.api_url, token))
}

/// The warning shown when the stored token is past its expiry.
pub fn expiry_notice(token: &Token) -> Option<String> {
    token.is_expired().then(|| {
        format!(
            "Stored token expired at {}. Please run spoti login",
            token.expiry
        )
    })
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

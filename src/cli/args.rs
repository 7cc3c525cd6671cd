use clap::{
    ArgAction, Parser, Subcommand,
    builder::{
        NonEmptyStringValueParser, Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::Shell;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about="A CLI for the Spotify Web API.",
  styles=styles(),
)]
pub struct Cli {
    /// Print the raw API objects as JSON
    #[clap(long, global = true)]
    pub json: bool,

    /// Show debug logs
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in to Spotify.
    Login,

    /// Get current user.
    Me,

    /// Search for tracks.
    Search(SearchOptions),

    /// Manage playlists
    #[command(subcommand)]
    Playlist(PlaylistCommand),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// The search query.
    #[clap(long, short)]
    pub query: String,

    /// Maximum number of tracks to show (1-50)
    #[clap(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub limit: u32,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistCommand {
    /// List your playlists.
    List,

    /// Show details for a single playlist
    Details(PlaylistIdOption),

    /// Create a playlist
    Create(CreatePlaylistOptions),

    /// Add tracks to a playlist
    AddTracks(PlaylistTracksOptions),

    /// Remove tracks from a playlist.
    RemoveTracks(PlaylistTracksOptions),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistIdOption {
    /// The playlist ID.
    #[clap(
        long = "playlistID",
        short = 'p',
        value_name = "ID",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub playlist_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CreatePlaylistOptions {
    /// The name of the playlist.
    #[clap(long, short, value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// The description of the playlist.
    #[clap(long, default_value = "")]
    pub description: String,

    /// Create the playlist as private instead of public
    #[clap(long)]
    pub private: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistTracksOptions {
    /// The playlist ID.
    #[clap(
        long = "playlistID",
        short = 'p',
        value_name = "ID",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub playlist_id: String,

    /// The IDs (or spotify:track: URIs) of the tracks; can be repeated
    #[clap(
        long = "trackID",
        short = 't',
        value_name = "ID",
        required = true,
        num_args = 1..,
        value_delimiter = ',',
        action = ArgAction::Append
    )]
    pub track_ids: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    pub shell: Shell,
}

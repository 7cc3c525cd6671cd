//! Spotify Web API CLI Library
//!
//! This library provides the building blocks of the `spoti` command-line client:
//! the OAuth authorization-code login with a local callback server, a small
//! authenticated client for the Web API endpoints the commands need, and the
//! local files that keep a login alive between invocations.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local callback server
//! - `browser` - Opening the authorization URL in the default browser
//! - `cli` - Command-line arguments and command implementations
//! - `config` - Configuration management and environment variables
//! - `error` - The error type shared by every command
//! - `management` - Local persistence of the token and user profile
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify accounts service and Web API client
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spoti::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> spoti::Result<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env();
//!     cli::me(&config, false).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every command and helper in the crate reports failures through
/// [`Error`], which knows the exit code the process should end with.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message.
///
/// # Example
///
/// ```
/// info!("Waiting for the browser redirect...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Logged in as: {}", user.id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to standard error.
///
/// Unlike the other status macros this one writes to stderr so that errors
/// stay visible when the regular output is piped. It does not exit: the
/// caller decides the exit code.
///
/// # Example
///
/// ```
/// error!("{}", err);
/// std::process::exit(err.exit_code());
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for issues that don't stop the command, such as an expired token
/// that is still sent to the API.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

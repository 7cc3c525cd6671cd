//! # Spotify Integration Module
//!
//! This module is the integration layer between `spoti` and Spotify's services:
//! the accounts service used during login and the Web API used by every other
//! command.
//!
//! ## Architecture
//!
//! ```text
//! CLI commands
//!      ↓
//! Spotify Integration Layer
//!     ├── Session (authorize URL, state check, code exchange)
//!     └── SpotifyClient (user, search, playlists)
//!      ↓
//! HTTP Layer (reqwest, JSON)
//!      ↓
//! Spotify accounts service / Web API
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Authorization code exchange
//! - `GET /me` - Current user's profile
//! - `GET /search?type=track` - Track search
//! - `GET /users/{user_id}/playlists` - User's playlists, all pages
//! - `GET /playlists/{playlist_id}` - Playlist details
//! - `POST /users/{user_id}/playlists` - Create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks
//! - `DELETE /playlists/{playlist_id}/tracks` - Remove tracks
//!
//! ## Error Handling
//!
//! There is no retry, backoff or token refresh. Non-success responses become
//! [`crate::Error::Api`] carrying the HTTP status and Spotify's error message;
//! transport failures become [`crate::Error::Http`].

pub mod auth;
mod client;
pub mod playlist;
mod search;
mod user;

pub use auth::Session;
pub use client::SpotifyClient;

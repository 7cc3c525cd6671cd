//! # API Module
//!
//! HTTP handlers of the short-lived local server that receives Spotify's
//! OAuth redirect during `spoti login`.
//!
//! ## Endpoints
//!
//! - [`callback`] - `GET /callback?code=...&state=...`. Validates the
//!   anti-forgery state, exchanges the code for a token, persists it and hands
//!   an authenticated client to the waiting login flow.
//! - [`fallback`] - Every other path. Logs the request and answers 404.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use spoti::api::{callback, fallback};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .fallback(fallback)
//!     .layer(Extension(context));
//! ```

mod callback;
mod fallback;

pub use callback::CallbackContext;
pub use callback::CallbackParams;
pub use callback::callback;
pub use fallback::fallback;

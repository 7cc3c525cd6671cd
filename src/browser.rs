//! Opening the authorization URL in the user's default browser.

use crate::{Error, Result};

/// Something that can show the user a URL.
pub trait Browser {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands the URL to the operating system's default handler.
///
/// Returns as soon as the handler has been launched; it never waits for the
/// browser to exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        webbrowser::open(url).map_err(|e| Error::Browser {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

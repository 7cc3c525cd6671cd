use rand::{Rng, distr::Alphanumeric};
use subtle::ConstantTimeEq;

use crate::{Error, Result};

const STATE_LENGTH: usize = 32;
const TRACK_URI_PREFIX: &str = "spotify:track:";

/// Generates the anti-forgery `state` value for one login attempt.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LENGTH)
        .map(char::from)
        .collect()
}

pub fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Turns a bare track id or a `spotify:track:` URI into a track URI.
pub fn track_uri(id: &str) -> Result<String> {
    let id = id.trim();
    let bare = id.strip_prefix(TRACK_URI_PREFIX).unwrap_or(id);

    if bare.is_empty() {
        return Err(Error::Validation("track ID must not be empty".to_string()));
    }
    if bare.contains(':') || bare.contains('/') {
        return Err(Error::Validation(format!("invalid track ID: {id}")));
    }

    Ok(format!("{TRACK_URI_PREFIX}{bare}"))
}

/// Checks that an id can be used as a single URL path segment.
///
/// `what` names the id in the error message, e.g. `"playlist ID"`.
pub fn path_id<'a>(what: &str, id: &'a str) -> Result<&'a str> {
    if id.is_empty() {
        return Err(Error::Validation(format!("{what} must not be empty")));
    }
    if id == "."
        || id == ".."
        || id.contains(['/', '?', '#', ':', '%'])
        || id.chars().any(char::is_whitespace)
    {
        return Err(Error::Validation(format!("invalid {what}: {id}")));
    }
    Ok(id)
}

pub fn track_uris(ids: &[String]) -> Result<Vec<String>> {
    ids.iter().map(|id| track_uri(id)).collect()
}

/// Joins artist names the way they are shown in listings.
pub fn join_names<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().collect::<Vec<_>>().join(", ")
}

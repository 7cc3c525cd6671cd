use std::path::PathBuf;

use spoti::Error;

#[test]
fn test_browser_error_is_one_line() {
    let err = Error::Browser {
        url: "https://accounts.spotify.com/authorize?client_id=abc".to_string(),
        reason: "no browser found".to_string(),
    };
    let msg = err.to_string();

    assert!(!msg.contains('\n'));
    assert!(msg.ends_with("https://accounts.spotify.com/authorize?client_id=abc"));
    assert!(msg.contains("no browser found"));
}

#[test]
fn test_exit_codes() {
    assert_eq!(Error::Validation("bad".to_string()).exit_code(), 2);
    assert_eq!(Error::Config("SPOTIFY_ID must be set".to_string()).exit_code(), 2);
    assert_eq!(
        Error::NotLoggedIn {
            path: PathBuf::from("token.json")
        }
        .exit_code(),
        2
    );
    assert_eq!(Error::MissingCode.exit_code(), 1);
    assert_eq!(Error::Pagination("http://elsewhere/".to_string()).exit_code(), 1);
}

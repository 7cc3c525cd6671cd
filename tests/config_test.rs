use std::path::PathBuf;

use spoti::{Error, config::*};

#[test]
fn test_defaults_when_nothing_is_set() {
    let config = Config::from_lookup(|_| None);

    assert_eq!(config.client_id, None);
    assert_eq!(config.client_secret, None);
    assert_eq!(config.redirect_uri, "http://localhost:3000/callback");
    assert_eq!(config.server_address, "127.0.0.1:3000");
    assert_eq!(config.scope, DEFAULT_SCOPE);
    assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.api_url, "https://api.spotify.com/v1");
    assert_eq!(config.token_file, PathBuf::from("token.json"));
    assert_eq!(config.user_file, PathBuf::from("user.json"));
}

#[test]
fn test_values_override_defaults() {
    let config = Config::from_lookup(|key| match key {
        "SPOTIFY_ID" => Some("id".to_string()),
        "SPOTIFY_SECRET" => Some("secret".to_string()),
        "SPOTIFY_API_URL" => Some("http://localhost:9999/v1/".to_string()),
        "SPOTI_TOKEN_FILE" => Some("/tmp/spoti/token.json".to_string()),
        _ => None,
    });

    assert_eq!(config.credentials().unwrap(), ("id", "secret"));
    // trailing slash is dropped so paths can be appended
    assert_eq!(config.api_url, "http://localhost:9999/v1");
    assert_eq!(config.token_file, PathBuf::from("/tmp/spoti/token.json"));
}

#[test]
fn test_empty_values_count_as_unset() {
    let config = Config::from_lookup(|key| match key {
        "SPOTIFY_ID" => Some("  ".to_string()),
        "SERVER_ADDRESS" => Some(String::new()),
        _ => None,
    });

    assert_eq!(config.client_id, None);
    assert_eq!(config.server_address, DEFAULT_SERVER_ADDRESS);
}

#[test]
fn test_credentials_name_the_missing_variable() {
    let config = Config::from_lookup(|key| match key {
        "SPOTIFY_ID" => Some("id".to_string()),
        _ => None,
    });

    match config.credentials() {
        Err(Error::Config(msg)) => assert!(msg.contains("SPOTIFY_SECRET")),
        other => panic!("expected config error, got {other:?}"),
    }
}

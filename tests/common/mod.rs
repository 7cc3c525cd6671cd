#![allow(dead_code)]

use std::path::Path;

use chrono::{Duration, Utc};
use serde_json::{Map, Value, json};
use spoti::{
    config::Config,
    management::LocalStore,
    types::{Token, User},
};

pub const CLIENT_BASIC_AUTH: &str = "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=";
pub const ACCESS_TOKEN: &str = "access-token";
pub const USER_ID: &str = "wizzler";

// Helper building a config that points every URL at the mock server and every
// file into `dir`.
pub fn test_config(server_uri: &str, dir: &Path) -> Config {
    test_config_with_address(server_uri, dir, "127.0.0.1:0")
}

pub fn test_config_with_address(server_uri: &str, dir: &Path, address: &str) -> Config {
    let token_file = dir.join("token.json").display().to_string();
    let user_file = dir.join("user.json").display().to_string();

    Config::from_lookup(|key| match key {
        "SPOTIFY_ID" => Some("client-id".to_string()),
        "SPOTIFY_SECRET" => Some("client-secret".to_string()),
        "SPOTIFY_TOKEN_URL" => Some(format!("{server_uri}/api/token")),
        "SPOTIFY_API_URL" => Some(format!("{server_uri}/v1")),
        "SERVER_ADDRESS" => Some(address.to_string()),
        "SPOTI_TOKEN_FILE" => Some(token_file.clone()),
        "SPOTI_USER_FILE" => Some(user_file.clone()),
        _ => None,
    })
}

pub fn valid_token() -> Token {
    Token {
        access_token: ACCESS_TOKEN.to_string(),
        token_type: "Bearer".to_string(),
        refresh_token: "refresh-token".to_string(),
        expiry: Utc::now() + Duration::hours(1),
        scope: Some("playlist-modify-public".to_string()),
    }
}

pub fn test_user() -> User {
    let mut extra = Map::new();
    extra.insert("country".to_string(), json!("SE"));
    extra.insert("uri".to_string(), json!("spotify:user:wizzler"));
    User {
        id: USER_ID.to_string(),
        display_name: Some("Wizzler".to_string()),
        extra,
    }
}

pub async fn logged_in(config: &Config) {
    let store = LocalStore::from_config(config);
    store.save_token(&valid_token()).await.unwrap();
    store.save_user(&test_user()).await.unwrap();
}

pub fn token_endpoint_response() -> Value {
    json!({
        "access_token": "fresh-access",
        "token_type": "Bearer",
        "expires_in": 3600,
        "refresh_token": "fresh-refresh",
        "scope": "user-read-private"
    })
}

pub fn playlist_json(id: &str, name: &str, public: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "uri": format!("spotify:playlist:{id}"),
        "description": "",
        "public": public,
        "collaborative": false,
        "owner": { "id": USER_ID, "display_name": "Wizzler" },
        "snapshot_id": "snapshot-0",
        "tracks": { "items": [], "next": null, "total": 0 }
    })
}

pub fn track_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "uri": format!("spotify:track:{id}"),
        "artists": [
            { "id": "a1", "name": "Artist A" },
            { "id": "a2", "name": "Artist B" }
        ],
        "album": { "id": "al1", "name": "The Album" }
    })
}

// Plain HTTP client for poking the callback server; no pooled connections so
// graceful shutdown never waits on an idle keep-alive.
pub fn http() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .build()
        .unwrap()
}

mod common;

use spoti::{
    Error,
    management::{LocalStore, load, save},
    types::{Token, User},
};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> LocalStore {
    LocalStore::new(dir.path().join("token.json"), dir.path().join("user.json"))
}

#[tokio::test]
async fn test_token_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let token = common::valid_token();

    store.save_token(&token).await.unwrap();
    let loaded = store.load_token().await.unwrap();

    assert_eq!(loaded, token);
}

#[tokio::test]
async fn test_user_round_trip_keeps_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let user = common::test_user();

    store.save_user(&user).await.unwrap();
    let loaded = store.load_user().await.unwrap();

    assert_eq!(loaded, user);
    assert_eq!(loaded.extra["country"], "SE");
}

#[tokio::test]
async fn test_saved_file_is_indented_json() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save_token(&common::valid_token()).await.unwrap();
    let content = std::fs::read_to_string(store.token_path()).unwrap();

    assert!(content.starts_with("{\n  \"access_token\""));
    assert!(content.contains("\"expiry\""));
}

#[tokio::test]
async fn test_save_overwrites_previous_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut first = common::valid_token();
    first.access_token = "a-much-longer-access-token-than-the-next-one".to_string();
    store.save_token(&first).await.unwrap();

    let second = common::valid_token();
    store.save_token(&second).await.unwrap();

    assert_eq!(store.load_token().await.unwrap(), second);
}

#[tokio::test]
async fn test_missing_token_is_not_logged_in() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    match store.load_token().await {
        Err(Error::NotLoggedIn { path }) => assert_eq!(path, dir.path().join("token.json")),
        other => panic!("expected NotLoggedIn, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_token_is_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.token_path(), "{ \"access_token\": 42 }").unwrap();

    let err = store.load_token().await.unwrap_err();
    assert!(matches!(err, Error::CorruptFile { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/deeper/user.json");

    save(&path, &common::test_user()).await.unwrap();
    let loaded: User = load(&path).await.unwrap();

    assert_eq!(loaded.id, common::USER_ID);
}

#[tokio::test]
async fn test_load_reads_go_style_token_without_scope() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("token.json");
    std::fs::write(
        &path,
        r#"{
    "access_token": "abc",
    "token_type": "Bearer",
    "refresh_token": "def",
    "expiry": "2030-01-01T12:00:00.123456+01:00"
}"#,
    )
    .unwrap();

    let token: Token = load(&path).await.unwrap();
    assert_eq!(token.access_token, "abc");
    assert_eq!(token.scope, None);
    assert!(!token.is_expired());
}

#[cfg(unix)]
#[tokio::test]
async fn test_files_are_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    // pre-existing file with wide permissions gets tightened
    std::fs::write(store.user_path(), "{}").unwrap();
    std::fs::set_permissions(store.user_path(), std::fs::Permissions::from_mode(0o644)).unwrap();

    store.save_token(&common::valid_token()).await.unwrap();
    store.save_user(&common::test_user()).await.unwrap();

    for path in [store.token_path(), store.user_path()] {
        let mode = std::fs::metadata(path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600, "{}", path.display());
    }
}

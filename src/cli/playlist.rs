use tabled::Table;

use crate::{
    Result,
    cli::{authenticated, print_json},
    config::Config,
    info,
    management::LocalStore,
    types::{FullPlaylist, PlaylistTableRow, SimplePlaylist, SnapshotResponse},
    utils,
};

pub async fn list_playlists(config: &Config, json: bool) -> Result<Vec<SimplePlaylist>> {
    let client = authenticated(config).await?;
    let user = LocalStore::from_config(config).load_user().await?;

    let playlists = client.user_playlists(&user.id).await?;

    if json {
        print_json(&playlists)?;
    } else if playlists.is_empty() {
        info!("No playlists found for {}", user.id);
    } else {
        let rows: Vec<PlaylistTableRow> = playlists
            .iter()
            .map(|p| PlaylistTableRow {
                name: p.name.clone(),
                id: p.id.clone(),
                uri: p.uri.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    Ok(playlists)
}

pub async fn playlist_details(
    config: &Config,
    playlist_id: &str,
    json: bool,
) -> Result<FullPlaylist> {
    let client = authenticated(config).await?;
    let playlist = client.playlist(playlist_id).await?;

    if json {
        print_json(&playlist)?;
    } else {
        println!("{}", render_playlist(&playlist));
        println!("{}", render_playlist_tracks(&playlist));
    }

    Ok(playlist)
}

/// Creates a playlist owned by the logged-in user.
///
/// Playlists are public unless `public` is false.
pub async fn create_playlist(
    config: &Config,
    name: &str,
    description: &str,
    public: bool,
    json: bool,
) -> Result<FullPlaylist> {
    let name = name.trim();
    if name.is_empty() {
        return Err(crate::Error::Validation("Name is required.".to_string()));
    }

    let client = authenticated(config).await?;
    let user = LocalStore::from_config(config).load_user().await?;

    let playlist = client
        .create_playlist(&user.id, name, description, public)
        .await?;

    if json {
        print_json(&playlist)?;
    } else {
        println!("{}", render_playlist(&playlist));
    }

    Ok(playlist)
}

pub async fn add_tracks(
    config: &Config,
    playlist_id: &str,
    track_ids: &[String],
    json: bool,
) -> Result<String> {
    let uris = utils::track_uris(track_ids)?;
    let client = authenticated(config).await?;

    let snapshot_id = client.add_tracks(playlist_id, &uris).await?;
    print_snapshot(&snapshot_id, json)?;

    Ok(snapshot_id)
}

pub async fn remove_tracks(
    config: &Config,
    playlist_id: &str,
    track_ids: &[String],
    json: bool,
) -> Result<String> {
    let uris = utils::track_uris(track_ids)?;
    let client = authenticated(config).await?;

    let snapshot_id = client.remove_tracks(playlist_id, &uris).await?;
    print_snapshot(&snapshot_id, json)?;

    Ok(snapshot_id)
}

fn print_snapshot(snapshot_id: &str, json: bool) -> Result<()> {
    if json {
        print_json(&SnapshotResponse {
            snapshot_id: snapshot_id.to_string(),
        })
    } else {
        println!("{snapshot_id}");
        Ok(())
    }
}

pub fn render_playlist(playlist: &FullPlaylist) -> String {
    let public = playlist
        .public
        .map(|p| p.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    [
        format!("Name: {}", playlist.name),
        format!("ID: {}", playlist.id),
        format!(
            "Owner: {}",
            playlist
                .owner
                .display_name
                .as_deref()
                .unwrap_or(&playlist.owner.id)
        ),
        format!("Public: {public}"),
        format!("URI: {}", playlist.uri),
        format!(
            "Description: {}",
            playlist.description.as_deref().unwrap_or_default()
        ),
    ]
    .join("\n")
}

pub fn render_playlist_tracks(playlist: &FullPlaylist) -> String {
    let mut out = String::from("Tracks:");

    // Local files and removed tracks come back with a null track.
    for item in &playlist.tracks.items {
        let Some(track) = &item.track else { continue };
        let added_by = item
            .added_by
            .as_ref()
            .map(|u| u.display_name.as_deref().unwrap_or(&u.id))
            .unwrap_or_default();

        out.push_str(&format!(
            "\n  - Name: {}\n    ID: {}\n    Added At: {}\n    Added By: {}",
            track.name,
            track.id.as_deref().unwrap_or_default(),
            item.added_at.as_deref().unwrap_or_default(),
            added_by,
        ));
    }

    out
}

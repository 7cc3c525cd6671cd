use std::collections::HashSet;

use reqwest::Method;

use crate::{
    Error, Result,
    spotify::SpotifyClient,
    types::{
        AddTracksRequest, CreatePlaylistRequest, FullPlaylist, Paging, RemoveTracksRequest,
        SimplePlaylist, SnapshotResponse, TrackUri,
    },
    utils::path_id,
};

/// Spotify accepts at most this many tracks per add/remove request.
pub const TRACKS_PER_REQUEST: usize = 100;
const PLAYLISTS_PER_PAGE: u32 = 50;

impl SpotifyClient {
    /// Lists every playlist of `user_id`, following the `next` links.
    ///
    /// A `next` link is only followed when it points below the API base URL
    /// and has not been fetched before.
    pub async fn user_playlists(&self, user_id: &str) -> Result<Vec<SimplePlaylist>> {
        let user_id = path_id("user ID", user_id)?;
        let mut playlists = Vec::new();
        let mut seen = HashSet::new();
        let mut next = Some(self.url(&format!(
            "/users/{user_id}/playlists?limit={PLAYLISTS_PER_PAGE}"
        )));

        while let Some(url) = next {
            if !self.is_api_url(&url) || !seen.insert(url.clone()) {
                return Err(Error::Pagination(url));
            }
            let page: Paging<SimplePlaylist> = self.get(&url).await?;
            playlists.extend(page.items);
            next = page.next;
        }

        Ok(playlists)
    }

    /// Fetches one playlist with its first page of tracks.
    pub async fn playlist(&self, playlist_id: &str) -> Result<FullPlaylist> {
        let playlist_id = path_id("playlist ID", playlist_id)?;
        self.get(&self.url(&format!("/playlists/{playlist_id}")))
            .await
    }

    pub async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Result<FullPlaylist> {
        let user_id = path_id("user ID", user_id)?;
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public,
        };
        self.send_json(Method::POST, &format!("/users/{user_id}/playlists"), &body)
            .await
    }

    /// Appends tracks to a playlist and returns the final snapshot id.
    ///
    /// Track URIs are sent in batches of [`TRACKS_PER_REQUEST`]; each batch
    /// produces a new snapshot and the one of the last batch is returned.
    pub async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<String> {
        let playlist_id = path_id("playlist ID", playlist_id)?;
        let path = format!("/playlists/{playlist_id}/tracks");
        let mut snapshot = String::new();

        for chunk in uris.chunks(TRACKS_PER_REQUEST) {
            let body = AddTracksRequest {
                uris: chunk.to_vec(),
            };
            let res: SnapshotResponse = self.send_json(Method::POST, &path, &body).await?;
            snapshot = res.snapshot_id;
        }

        Ok(snapshot)
    }

    /// Removes every occurrence of the given tracks from a playlist.
    pub async fn remove_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<String> {
        let playlist_id = path_id("playlist ID", playlist_id)?;
        let path = format!("/playlists/{playlist_id}/tracks");
        let mut snapshot = String::new();

        for chunk in uris.chunks(TRACKS_PER_REQUEST) {
            let body = RemoveTracksRequest {
                tracks: chunk
                    .iter()
                    .map(|uri| TrackUri { uri: uri.clone() })
                    .collect(),
            };
            let res: SnapshotResponse = self.send_json(Method::DELETE, &path, &body).await?;
            snapshot = res.snapshot_id;
        }

        Ok(snapshot)
    }
}

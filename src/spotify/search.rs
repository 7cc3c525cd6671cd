use reqwest::Url;

use crate::{
    Error, Result,
    spotify::SpotifyClient,
    types::{SearchResponse, Track},
};

impl SpotifyClient {
    /// Searches the catalog for tracks matching `query`.
    ///
    /// Only the first page of results is returned; `limit` is passed through
    /// and must be between 1 and 50.
    pub async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>> {
        let limit = limit.to_string();
        let url = Url::parse_with_params(
            &self.url("/search"),
            &[
                ("q", query),
                ("type", "track"),
                ("limit", limit.as_str()),
            ],
        )
        .map_err(|e| Error::Config(format!("invalid SPOTIFY_API_URL: {e}")))?;

        let res: SearchResponse = self.get(url.as_str()).await?;
        Ok(res.tracks.items)
    }
}

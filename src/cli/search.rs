use tabled::Table;

use crate::{
    Result,
    cli::{authenticated, print_json},
    config::Config,
    info,
    types::{Track, TrackTableRow},
    utils,
};

pub async fn search(config: &Config, query: &str, limit: u32, json: bool) -> Result<Vec<Track>> {
    let client = authenticated(config).await?;
    let tracks = client.search_tracks(query, limit).await?;

    if json {
        print_json(&tracks)?;
    } else if tracks.is_empty() {
        info!("No tracks found for \"{}\"", query);
    } else {
        println!("{}", render_tracks(&tracks));
    }

    Ok(tracks)
}

pub fn render_tracks(tracks: &[Track]) -> String {
    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: utils::join_names(t.artists.iter().map(|a| a.name.as_str())),
            album: t.album.as_ref().map(|a| a.name.clone()).unwrap_or_default(),
            id: t.id.clone().unwrap_or_default(),
            uri: t.uri.clone(),
        })
        .collect();

    Table::new(rows).to_string()
}

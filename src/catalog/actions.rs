//! Per-track actions: favorite, stream, download

use tracing::{debug, info};
use uuid::Uuid;

use crate::types::{DownloadTicket, FavoriteToggle, StreamTicket};
use crate::utils::time::now;

use super::{Catalog, UNKNOWN_ARTIST};

/// Flip a track's favorite status
pub fn toggle_favorite(catalog: &Catalog, id: &str) -> Option<FavoriteToggle> {
    let artists = catalog.artists.read();
    let mut tracks = catalog.tracks.write();

    let Some(track) = tracks.toggle_favorite(id) else {
        debug!(track_id = id, "favorite toggle skipped, track not found");
        return None;
    };

    let artist_name = artists.name_of(track.artist_id.as_str()).unwrap_or(UNKNOWN_ARTIST);
    let message = if track.is_favorite {
        format!("Track \"{}\" by {} added to favorites", track.title, artist_name)
    } else {
        format!("Track \"{}\" by {} removed from favorites", track.title, artist_name)
    };

    info!(track_id = %track.id, is_favorite = track.is_favorite, "favorite toggled");
    Some(FavoriteToggle {
        id: track.id.clone(),
        is_favorite: track.is_favorite,
        message,
    })
}

/// Log a stream event and hand out a one-off stream locator
pub fn record_stream(catalog: &Catalog, id: &str) -> Option<StreamTicket> {
    let artists = catalog.artists.read();
    let tracks = catalog.tracks.read();

    let Some(track) = tracks.get(id) else {
        debug!(track_id = id, "stream skipped, track not found");
        return None;
    };

    catalog.events.write().append(track.id.clone(), now());

    let artist_name = artists.name_of(track.artist_id.as_str()).map(str::to_string);
    let stream_url = format!(
        "{}/stream/{}?token={}",
        catalog.settings.stream_base_url,
        track.id,
        Uuid::new_v4().simple()
    );
    let message = format!(
        "Stream started for \"{}\" by {}",
        track.title,
        artist_name.as_deref().unwrap_or(UNKNOWN_ARTIST)
    );

    info!(track_id = %track.id, "stream recorded");
    Some(StreamTicket {
        id: track.id.clone(),
        title: track.title.clone(),
        stream_url,
        message,
        artist_id: track.artist_id.clone(),
        artist_name,
    })
}

/// Describe where a download of the track would land
pub fn describe_download(catalog: &Catalog, id: &str) -> Option<DownloadTicket> {
    let artists = catalog.artists.read();
    let tracks = catalog.tracks.read();

    let Some(track) = tracks.get(id) else {
        debug!(track_id = id, "download skipped, track not found");
        return None;
    };

    let artist_name = artists
        .name_of(track.artist_id.as_str())
        .unwrap_or(UNKNOWN_ARTIST)
        .to_string();
    let file_name = collapse_whitespace(&format!(
        "{} - {}.{}",
        artist_name, track.title, catalog.settings.download_extension
    ));
    let file_path = format!("{}/{}", catalog.settings.download_root, file_name);

    Some(DownloadTicket {
        file_path,
        file_name,
        artist_name,
    })
}

/// Replace every run of whitespace with a single underscore
fn collapse_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push('_');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

//! CRUD operations for artists and tracks

use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Artist, ArtistPatch, NewArtist, NewTrack, Track};

use super::Catalog;

pub fn list_artists(catalog: &Catalog) -> Vec<Artist> {
    catalog.artists.read().list()
}

pub fn get_artist(catalog: &Catalog, id: &str) -> Option<Artist> {
    let artist = catalog.artists.read().get(id).cloned();
    if artist.is_none() {
        debug!(artist_id = id, "artist lookup missed");
    }
    artist
}

pub fn create_artist(catalog: &Catalog, new_artist: NewArtist) -> Artist {
    let artist = catalog.artists.write().create(new_artist);
    info!(artist_id = %artist.id, name = %artist.name, "artist created");
    artist
}

pub fn update_artist(catalog: &Catalog, id: &str, patch: ArtistPatch) -> Option<Artist> {
    let updated = catalog.artists.write().update(id, patch);
    match &updated {
        Some(artist) => info!(artist_id = %artist.id, "artist updated"),
        None => debug!(artist_id = id, "update skipped, artist not found"),
    }
    updated
}

/// Remove an artist; its tracks are left in place
pub fn delete_artist(catalog: &Catalog, id: &str) -> bool {
    let removed = catalog.artists.write().delete(id);
    if removed {
        info!(artist_id = id, "artist deleted");
    } else {
        debug!(artist_id = id, "delete skipped, artist not found");
    }
    removed
}

pub fn list_tracks(catalog: &Catalog) -> Vec<Track> {
    catalog.tracks.read().list()
}

pub fn list_tracks_by_artist(catalog: &Catalog, artist_id: &str) -> Vec<Track> {
    catalog.tracks.read().list_by_artist(artist_id)
}

pub fn get_track(catalog: &Catalog, id: &str) -> Option<Track> {
    let track = catalog.tracks.read().get(id).cloned();
    if track.is_none() {
        debug!(track_id = id, "track lookup missed");
    }
    track
}

/// Create a track (thread-safe: holds the artist read lock across the insert)
pub fn create_track(catalog: &Catalog, new_track: NewTrack) -> CatalogResult<Track> {
    let artists = catalog.artists.read();
    if !artists.contains(new_track.artist_id.as_str()) {
        warn!(artist_id = %new_track.artist_id, "track rejected, unknown artist");
        return Err(CatalogError::UnknownArtist(new_track.artist_id));
    }

    let track = catalog.tracks.write().insert(new_track);
    info!(track_id = %track.id, artist_id = %track.artist_id, title = %track.title, "track created");
    Ok(track)
}

//! Catalog - Core data engine
//!
//! This module owns the artist store, the track store and the stream event
//! log, each behind its own lock, and implements the operations that need
//! more than one of them.
//!
//! Locks are always taken in the order artists, tracks, events.

mod actions;
mod analytics;
mod crud;
pub mod seed;

use parking_lot::RwLock;

use crate::config::{DEFAULT_DOWNLOAD_ROOT, DEFAULT_STREAM_BASE_URL};
use crate::error::CatalogResult;
use crate::store::{ArtistStore, EventLog, TrackStore};
use crate::types::{
    AnalyticsReport, Artist, ArtistPatch, DownloadTicket, FavoriteToggle, NewArtist, NewTrack,
    StreamTicket, Track,
};

pub use analytics::compute_analytics;
pub use seed::{seed_mock_catalog, SeedSummary};

/// Name used in messages when a track's artist no longer exists
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Settings for the synthetic stream and download locators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub stream_base_url: String,
    pub download_root: String,
    pub download_extension: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            stream_base_url: DEFAULT_STREAM_BASE_URL.to_string(),
            download_root: DEFAULT_DOWNLOAD_ROOT.to_string(),
            download_extension: "mp4".to_string(),
        }
    }
}

/// In-memory music catalog
pub struct Catalog {
    pub(crate) artists: RwLock<ArtistStore>,
    pub(crate) tracks: RwLock<TrackStore>,
    pub(crate) events: RwLock<EventLog>,
    pub(crate) settings: CatalogSettings,
}

impl Catalog {
    /// Create an empty catalog with default settings
    pub fn new() -> Self {
        Self::with_settings(CatalogSettings::default())
    }

    /// Create an empty catalog with custom locator settings
    pub fn with_settings(settings: CatalogSettings) -> Self {
        Self::from_stores(ArtistStore::new(), TrackStore::new(), EventLog::new(), settings)
    }

    /// Build a catalog around existing stores
    pub fn from_stores(
        artists: ArtistStore,
        tracks: TrackStore,
        events: EventLog,
        settings: CatalogSettings,
    ) -> Self {
        Self {
            artists: RwLock::new(artists),
            tracks: RwLock::new(tracks),
            events: RwLock::new(events),
            settings,
        }
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Number of logged stream events
    pub fn stream_count(&self) -> usize {
        self.events.read().len()
    }

    /// True when the favorites set and the per-track flags agree
    pub fn favorites_consistent(&self) -> bool {
        self.tracks.read().favorites_consistent()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export methods from submodules by implementing them here
impl Catalog {
    // Artist operations (from crud.rs)
    pub fn list_artists(&self) -> Vec<Artist> {
        crud::list_artists(self)
    }

    pub fn get_artist(&self, id: &str) -> Option<Artist> {
        crud::get_artist(self, id)
    }

    pub fn create_artist(&self, new_artist: NewArtist) -> Artist {
        crud::create_artist(self, new_artist)
    }

    pub fn update_artist(&self, id: &str, patch: ArtistPatch) -> Option<Artist> {
        crud::update_artist(self, id, patch)
    }

    pub fn delete_artist(&self, id: &str) -> bool {
        crud::delete_artist(self, id)
    }

    // Track operations (from crud.rs)
    pub fn list_tracks(&self) -> Vec<Track> {
        crud::list_tracks(self)
    }

    pub fn list_tracks_by_artist(&self, artist_id: &str) -> Vec<Track> {
        crud::list_tracks_by_artist(self, artist_id)
    }

    pub fn get_track(&self, id: &str) -> Option<Track> {
        crud::get_track(self, id)
    }

    pub fn create_track(&self, new_track: NewTrack) -> CatalogResult<Track> {
        crud::create_track(self, new_track)
    }

    // Track actions (from actions.rs)
    pub fn toggle_favorite(&self, id: &str) -> Option<FavoriteToggle> {
        actions::toggle_favorite(self, id)
    }

    pub fn record_stream(&self, id: &str) -> Option<StreamTicket> {
        actions::record_stream(self, id)
    }

    pub fn describe_download(&self, id: &str) -> Option<DownloadTicket> {
        actions::describe_download(self, id)
    }

    // Analytics (from analytics.rs)
    pub fn analytics(&self, artist_id: Option<&str>) -> AnalyticsReport {
        let tracks = self.tracks.read();
        let events = self.events.read();
        compute_analytics(&tracks, &events, artist_id)
    }
}

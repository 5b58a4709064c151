//! Analytics report types

use serde::{Deserialize, Serialize};

/// Number of tracks sharing a genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Summary over tracks and stream events, optionally scoped to one artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalyticsReport {
    #[serde(rename = "totalTracks")]
    pub total_tracks: usize,
    #[serde(rename = "totalFavorites")]
    pub total_favorites: usize,
    #[serde(rename = "topGenres")]
    pub top_genres: Vec<GenreCount>,
    /// Seconds of playback across all in-scope stream events
    #[serde(rename = "totalStreamTime")]
    pub total_stream_time: u64,
    /// Seconds; zero when there are no tracks in scope
    #[serde(rename = "averageTrackDuration")]
    pub average_track_duration: f64,
}

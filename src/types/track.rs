//! Track types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArtistId, TrackId};

/// Musical work belonging to one artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    #[serde(rename = "artistId")]
    pub artist_id: ArtistId,
    pub genre: String,
    /// Length in seconds
    pub duration: u32,
    #[serde(rename = "releaseDate")]
    pub release_date: DateTime<Utc>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Mirrors membership in the track store's favorites set
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

/// Fields required to create a track
#[derive(Debug, Clone)]
pub struct NewTrack {
    pub title: String,
    pub artist_id: ArtistId,
    pub genre: String,
    pub duration: u32,
    pub release_date: Option<DateTime<Utc>>,
}

impl NewTrack {
    pub fn new(
        title: impl Into<String>,
        artist_id: ArtistId,
        genre: impl Into<String>,
        duration: u32,
    ) -> Self {
        Self {
            title: title.into(),
            artist_id,
            genre: genre.into(),
            duration,
            release_date: None,
        }
    }

    pub fn released_on(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = Some(release_date);
        self
    }
}

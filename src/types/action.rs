//! Results of the per-track actions (favorite, stream, download)

use serde::{Deserialize, Serialize};

use super::{ArtistId, TrackId};

/// Outcome of flipping a track's favorite status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteToggle {
    pub id: TrackId,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
    pub message: String,
}

/// Descriptor handed out when a stream starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamTicket {
    pub id: TrackId,
    pub title: String,
    #[serde(rename = "streamUrl")]
    pub stream_url: String,
    pub message: String,
    #[serde(rename = "artistId")]
    pub artist_id: ArtistId,
    #[serde(rename = "artistName", default, skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
}

/// Descriptive download metadata; no file is ever produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadTicket {
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "artistName")]
    pub artist_name: String,
}

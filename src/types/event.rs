//! Stream play events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TrackId;

/// A logged play of a track
///
/// The referenced track is not required to still exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamEvent {
    #[serde(rename = "trackId")]
    pub track_id: TrackId,
    pub timestamp: DateTime<Utc>,
}

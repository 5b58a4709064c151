//! Artist types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ArtistId;

/// Performer in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub genre: String,
    pub bio: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields required to create an artist
#[derive(Debug, Clone)]
pub struct NewArtist {
    pub name: String,
    pub genre: String,
    pub bio: String,
    pub image_url: Option<String>,
}

impl NewArtist {
    pub fn new(name: impl Into<String>, genre: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
            bio: bio.into(),
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Partial update for an artist; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

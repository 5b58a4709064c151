//! Artist store

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::types::{Artist, ArtistId, ArtistPatch, NewArtist};
use crate::utils::time::now;

/// Artists keyed by id, in insertion order
#[derive(Debug, Clone, Default)]
pub struct ArtistStore {
    artists: IndexMap<ArtistId, Artist>,
}

impl ArtistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// All artists in insertion order
    pub fn list(&self) -> Vec<Artist> {
        self.artists.values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<&Artist> {
        self.artists.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.artists.contains_key(id)
    }

    /// Name of the artist, if it still exists
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.artists.get(id).map(|artist| artist.name.as_str())
    }

    /// Append a new artist with a fresh id
    pub fn create(&mut self, new_artist: NewArtist) -> Artist {
        self.create_at(new_artist, now())
    }

    pub(crate) fn create_at(&mut self, new_artist: NewArtist, created_at: DateTime<Utc>) -> Artist {
        let artist = Artist {
            id: ArtistId::generate(),
            name: new_artist.name,
            genre: new_artist.genre,
            bio: new_artist.bio,
            image_url: new_artist.image_url,
            created_at,
            updated_at: None,
        };

        self.artists.insert(artist.id.clone(), artist.clone());
        artist
    }

    /// Merge the supplied fields over an existing artist, keeping its position
    pub fn update(&mut self, id: &str, patch: ArtistPatch) -> Option<Artist> {
        let artist = self.artists.get_mut(id)?;

        if let Some(name) = patch.name {
            artist.name = name;
        }
        if let Some(genre) = patch.genre {
            artist.genre = genre;
        }
        if let Some(bio) = patch.bio {
            artist.bio = bio;
        }
        if let Some(image_url) = patch.image_url {
            artist.image_url = Some(image_url);
        }
        artist.updated_at = Some(now());

        Some(artist.clone())
    }

    /// Remove an artist; the remaining artists keep their order
    pub fn delete(&mut self, id: &str) -> bool {
        self.artists.shift_remove(id).is_some()
    }
}

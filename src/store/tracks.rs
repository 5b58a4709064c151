//! Track store and favorites set

use chrono::{DateTime, Utc};
use indexmap::{IndexMap, IndexSet};

use crate::types::{NewTrack, Track, TrackId};
use crate::utils::time::now;

/// Tracks keyed by id, in insertion order
///
/// `favorites` is the source of truth for favorite status. Each track's
/// `is_favorite` flag is a copy kept in step by [`TrackStore::toggle_favorite`].
#[derive(Debug, Clone, Default)]
pub struct TrackStore {
    tracks: IndexMap<TrackId, Track>,
    favorites: IndexSet<TrackId>,
}

impl TrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All tracks in insertion order
    pub fn list(&self) -> Vec<Track> {
        self.tracks.values().cloned().collect()
    }

    /// Tracks whose `artist_id` matches, in insertion order
    pub fn list_by_artist(&self, artist_id: &str) -> Vec<Track> {
        self.tracks
            .values()
            .filter(|track| track.artist_id.as_str() == artist_id)
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    pub fn get(&self, id: &str) -> Option<&Track> {
        self.tracks.get(id)
    }

    /// Append a new track with a fresh id
    ///
    /// The artist reference is not checked here; `Catalog::create_track` does
    /// that against the artist store before calling in.
    pub fn insert(&mut self, new_track: NewTrack) -> Track {
        self.insert_at(new_track, now())
    }

    pub(crate) fn insert_at(&mut self, new_track: NewTrack, created_at: DateTime<Utc>) -> Track {
        let track = Track {
            id: TrackId::generate(),
            title: new_track.title,
            artist_id: new_track.artist_id,
            genre: new_track.genre,
            duration: new_track.duration,
            release_date: new_track.release_date.unwrap_or(created_at),
            created_at,
            is_favorite: false,
        };

        self.tracks.insert(track.id.clone(), track.clone());
        track
    }

    /// Flip favorite status, updating the set and the track's flag together
    pub fn toggle_favorite(&mut self, id: &str) -> Option<&Track> {
        let track = self.tracks.get_mut(id)?;

        if self.favorites.shift_remove(id) {
            track.is_favorite = false;
        } else {
            self.favorites.insert(track.id.clone());
            track.is_favorite = true;
        }

        Some(&*track)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Favorite track ids in the order they were favorited
    pub fn favorite_ids(&self) -> impl Iterator<Item = &TrackId> {
        self.favorites.iter()
    }

    /// True when every track's flag matches its membership in the favorites set
    pub fn favorites_consistent(&self) -> bool {
        let flags_match = self
            .tracks
            .values()
            .all(|track| track.is_favorite == self.favorites.contains(&track.id));
        let no_strays = self.favorites.iter().all(|id| self.tracks.contains_key(id));
        flags_match && no_strays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArtistId;
    use crate::utils::time::date_utc;

    fn new_track(title: &str, artist: &str) -> NewTrack {
        NewTrack::new(title, ArtistId::from(artist), "Pop", 180)
    }

    #[test]
    fn test_insert_defaults() {
        let mut store = TrackStore::new();
        let track = store.insert(new_track("Song", "a1"));

        assert!(!track.is_favorite);
        assert_eq!(track.release_date, track.created_at);
        assert_eq!(store.get(track.id.as_str()), Some(&track));
    }

    #[test]
    fn test_insert_at_defaults_release_date_to_creation_time() {
        let mut store = TrackStore::new();
        let created_at = date_utc(2023, 6, 1).unwrap();
        let track = store.insert_at(new_track("Song", "a1"), created_at);

        assert_eq!(track.created_at, created_at);
        assert_eq!(track.release_date, created_at);
    }

    #[test]
    fn test_insert_keeps_supplied_release_date() {
        let mut store = TrackStore::new();
        let released = date_utc(2019, 3, 29).unwrap();
        let track = store.insert(new_track("Bad Guy", "a1").released_on(released));
        assert_eq!(track.release_date, released);
    }

    #[test]
    fn test_list_by_artist() {
        let mut store = TrackStore::new();
        store.insert(new_track("One", "a1"));
        store.insert(new_track("Two", "a2"));
        store.insert(new_track("Three", "a1"));

        let titles: Vec<String> = store.list_by_artist("a1").into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["One", "Three"]);
        assert!(store.list_by_artist("a3").is_empty());
    }

    #[test]
    fn test_toggle_favorite_twice_restores_state() {
        let mut store = TrackStore::new();
        let id = store.insert(new_track("Song", "a1")).id;

        assert!(store.toggle_favorite(id.as_str()).unwrap().is_favorite);
        assert!(store.is_favorite(id.as_str()));
        assert_eq!(store.favorite_count(), 1);
        assert!(store.favorites_consistent());

        assert!(!store.toggle_favorite(id.as_str()).unwrap().is_favorite);
        assert!(!store.is_favorite(id.as_str()));
        assert_eq!(store.favorite_count(), 0);
        assert!(store.favorites_consistent());
    }

    #[test]
    fn test_toggle_missing_track() {
        let mut store = TrackStore::new();
        assert!(store.toggle_favorite("missing").is_none());
        assert_eq!(store.favorite_count(), 0);
    }

    #[test]
    fn test_favorites_never_diverge() {
        let mut store = TrackStore::new();
        let ids: Vec<TrackId> = (0..5)
            .map(|i| store.insert(new_track(&format!("T{}", i), "a1")).id)
            .collect();

        for step in [0, 3, 1, 3, 4, 0, 0, 2, 4] {
            store.toggle_favorite(ids[step].as_str());
            assert!(store.favorites_consistent());
        }

        let favorites: Vec<&str> = store.favorite_ids().map(|id| id.as_str()).collect();
        let flagged: Vec<&str> = store
            .iter()
            .filter(|t| t.is_favorite)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(favorites.len(), flagged.len());
        assert!(flagged.iter().all(|id| favorites.contains(id)));
    }
}

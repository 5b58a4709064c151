//! Demo data for a freshly started server
//!
//! Seeding is strictly sequential: artists first, then tracks using the ids
//! the artist store handed back, then the initial favorites.

use tracing::info;

use crate::error::CatalogResult;
use crate::types::{ArtistId, NewArtist, NewTrack, TrackId};
use crate::utils::time::date_utc;

use super::Catalog;

struct MockArtist {
    name: &'static str,
    genre: &'static str,
    bio: &'static str,
    image_url: &'static str,
}

struct MockTrack {
    title: &'static str,
    /// Index into `MOCK_ARTISTS`
    artist: usize,
    genre: &'static str,
    duration: u32,
    released: (i32, u32, u32),
}

const MOCK_ARTISTS: &[MockArtist] = &[
    MockArtist {
        name: "The Weeknd",
        genre: "R&B",
        bio: "Abel Makkonen Tesfaye, known professionally as the Weeknd, is a Canadian singer-songwriter and record producer.",
        image_url: "https://example.com/images/the-weeknd.jpg",
    },
    MockArtist {
        name: "Taylor Swift",
        genre: "Pop",
        bio: "Taylor Alison Swift is an American singer-songwriter. Her discography spans multiple genres, and her narrative songwriting is often inspired by her personal life.",
        image_url: "https://example.com/images/taylor-swift.jpg",
    },
    MockArtist {
        name: "Kendrick Lamar",
        genre: "Hip Hop",
        bio: "Kendrick Lamar Duckworth is an American rapper, songwriter, and record producer. He is often cited as one of the most influential rappers of his generation.",
        image_url: "https://example.com/images/kendrick-lamar.jpg",
    },
    MockArtist {
        name: "Billie Eilish",
        genre: "Pop",
        bio: "Billie Eilish Pirate Baird O'Connell is an American singer and songwriter. She first gained attention in 2015 with her debut single \"Ocean Eyes\".",
        image_url: "https://example.com/images/billie-eilish.jpg",
    },
];

const MOCK_TRACKS: &[MockTrack] = &[
    MockTrack { title: "Blinding Lights", artist: 0, genre: "R&B", duration: 200, released: (2019, 11, 29) },
    MockTrack { title: "Save Your Tears", artist: 0, genre: "R&B", duration: 215, released: (2020, 8, 9) },
    MockTrack { title: "Anti-Hero", artist: 1, genre: "Pop", duration: 200, released: (2022, 10, 21) },
    MockTrack { title: "Cruel Summer", artist: 1, genre: "Pop", duration: 178, released: (2019, 8, 23) },
    MockTrack { title: "HUMBLE.", artist: 2, genre: "Hip Hop", duration: 177, released: (2017, 3, 30) },
    MockTrack { title: "Bad Guy", artist: 3, genre: "Pop", duration: 194, released: (2019, 3, 29) },
];

/// Indexes into `MOCK_TRACKS` favorited after seeding
const MOCK_FAVORITES: &[usize] = &[0, 2];

/// What a seeding run added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub artists: usize,
    pub tracks: usize,
    pub favorites: usize,
}

/// Fill an empty catalog with demo artists and tracks
///
/// Returns `None` without touching anything when the catalog already holds
/// artists or tracks.
pub fn seed_mock_catalog(catalog: &Catalog) -> CatalogResult<Option<SeedSummary>> {
    if !catalog.artists.read().is_empty() || !catalog.tracks.read().is_empty() {
        return Ok(None);
    }

    let artist_ids: Vec<ArtistId> = MOCK_ARTISTS
        .iter()
        .map(|mock| {
            let new_artist =
                NewArtist::new(mock.name, mock.genre, mock.bio).with_image_url(mock.image_url);
            catalog.create_artist(new_artist).id
        })
        .collect();

    let mut track_ids: Vec<TrackId> = Vec::with_capacity(MOCK_TRACKS.len());
    for mock in MOCK_TRACKS {
        let Some(artist_id) = artist_ids.get(mock.artist) else {
            continue;
        };
        let mut new_track = NewTrack::new(mock.title, artist_id.clone(), mock.genre, mock.duration);
        let (year, month, day) = mock.released;
        if let Some(released) = date_utc(year, month, day) {
            new_track = new_track.released_on(released);
        }
        track_ids.push(catalog.create_track(new_track)?.id);
    }

    let favorites = MOCK_FAVORITES
        .iter()
        .filter_map(|index| track_ids.get(*index))
        .filter_map(|id| catalog.toggle_favorite(id.as_str()))
        .count();

    let summary = SeedSummary {
        artists: artist_ids.len(),
        tracks: track_ids.len(),
        favorites,
    };
    info!(
        artists = summary.artists,
        tracks = summary.tracks,
        favorites = summary.favorites,
        "mock catalog seeded"
    );
    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_in_order() {
        let catalog = Catalog::new();
        let summary = seed_mock_catalog(&catalog).unwrap().unwrap();

        assert_eq!(
            summary,
            SeedSummary {
                artists: 4,
                tracks: 6,
                favorites: 2
            }
        );

        let weeknd = &catalog.list_artists()[0];
        assert_eq!(weeknd.name, "The Weeknd");
        let titles: Vec<String> = catalog
            .list_tracks_by_artist(weeknd.id.as_str())
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Blinding Lights", "Save Your Tears"]);

        let favorites: Vec<String> = catalog
            .list_tracks()
            .into_iter()
            .filter(|t| t.is_favorite)
            .map(|t| t.title)
            .collect();
        assert_eq!(favorites, vec!["Blinding Lights", "Anti-Hero"]);
        assert!(catalog.favorites_consistent());
    }

    #[test]
    fn test_seed_twice_is_noop() {
        let catalog = Catalog::new();
        seed_mock_catalog(&catalog).unwrap();
        assert!(seed_mock_catalog(&catalog).unwrap().is_none());
        assert_eq!(catalog.list_artists().len(), 4);
        assert_eq!(catalog.list_tracks().len(), 6);
    }

    #[test]
    fn test_seed_uses_release_dates() {
        let catalog = Catalog::new();
        seed_mock_catalog(&catalog).unwrap();

        let humble = catalog
            .list_tracks()
            .into_iter()
            .find(|t| t.title == "HUMBLE.")
            .unwrap();
        assert_eq!(humble.release_date, date_utc(2017, 3, 30).unwrap());
    }
}

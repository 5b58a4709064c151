//! Analytics roll-up over the track store and the event log

use indexmap::IndexMap;

use crate::store::{EventLog, TrackStore};
use crate::types::{AnalyticsReport, GenreCount, Track};

/// Compute the analytics report, optionally scoped to one artist
///
/// Scoped reports only count that artist's tracks and the stream events whose
/// track currently belongs to the artist. Events pointing at a track that no
/// longer exists add nothing to the stream time.
pub fn compute_analytics(
    tracks: &TrackStore,
    events: &EventLog,
    artist_id: Option<&str>,
) -> AnalyticsReport {
    let in_scope = |track: &Track| artist_id.map_or(true, |id| track.artist_id.as_str() == id);

    let scoped: Vec<&Track> = tracks.iter().filter(|track| in_scope(*track)).collect();
    let total_tracks = scoped.len();

    let total_favorites = match artist_id {
        Some(_) => scoped.iter().filter(|track| track.is_favorite).count(),
        None => tracks.favorite_count(),
    };

    let total_stream_time: u64 = events
        .iter()
        .filter_map(|event| tracks.get(event.track_id.as_str()))
        .filter(|track| in_scope(*track))
        .map(|track| u64::from(track.duration))
        .sum();

    let total_duration: u64 = scoped.iter().map(|track| u64::from(track.duration)).sum();
    let average_track_duration = if total_tracks == 0 {
        0.0
    } else {
        total_duration as f64 / total_tracks as f64
    };

    AnalyticsReport {
        total_tracks,
        total_favorites,
        top_genres: rank_genres(&scoped),
        total_stream_time,
        average_track_duration,
    }
}

/// Count tracks per genre, most common first; ties keep first-appearance order
fn rank_genres(tracks: &[&Track]) -> Vec<GenreCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for track in tracks {
        *counts.entry(track.genre.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<GenreCount> = counts
        .into_iter()
        .map(|(genre, count)| GenreCount {
            genre: genre.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

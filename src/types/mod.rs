//! Data types for the music catalog
//!
//! This module contains the records held by the stores and the shapes
//! computed from them.

mod action;
mod analytics;
mod artist;
mod event;
mod ids;
mod track;

pub use action::{DownloadTicket, FavoriteToggle, StreamTicket};
pub use analytics::{AnalyticsReport, GenreCount};
pub use artist::{Artist, ArtistPatch, NewArtist};
pub use event::StreamEvent;
pub use ids::{ArtistId, TrackId};
pub use track::{NewTrack, Track};

//! Music Catalog API
//!
//! A small in-memory REST API for a toy music catalog: artists, tracks,
//! stream/download/favorite actions and a derived analytics summary.
//!
//! # Features
//!
//! - **Ordered stores**: artists and tracks keyed by id, insertion ordered
//! - **Thread-Safe**: one `RwLock` per store, fixed lock order
//! - **Favorites**: a single favorites set mirrored onto each track
//! - **Analytics**: genre ranking, stream time and average duration, optionally per artist
//!
//! # Modules
//!
//! - `types`: Records and computed shapes (Artist, Track, AnalyticsReport, ...)
//! - `store`: Artist store, track store and stream event log
//! - `catalog`: Core engine combining the stores, plus demo seeding
//! - `api`: Axum router and REST handlers
//! - `config`: Environment-driven settings
//! - `error`: Catalog and server error types
//! - `utils`: Timestamp helpers
//!
//! # Example
//!
//! ```no_run
//! use music_catalog::{Catalog, NewArtist, NewTrack};
//!
//! let catalog = Catalog::new();
//! let artist = catalog.create_artist(NewArtist::new("Nina Simone", "Jazz", "Pianist"));
//! let track = catalog
//!     .create_track(NewTrack::new("Sinnerman", artist.id.clone(), "Jazz", 622))
//!     .unwrap();
//! catalog.record_stream(track.id.as_str());
//! assert_eq!(catalog.analytics(None).total_stream_time, 622);
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use catalog::{Catalog, CatalogSettings};
pub use config::Config;
pub use error::{CatalogError, CatalogResult, ServerResult};
pub use types::{
    AnalyticsReport, Artist, ArtistId, ArtistPatch, DownloadTicket, FavoriteToggle, GenreCount,
    NewArtist, NewTrack, StreamEvent, StreamTicket, Track, TrackId,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

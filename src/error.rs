//! Error types for the catalog and the server binary

use thiserror::Error;

use crate::types::ArtistId;

/// Rejected catalog writes
///
/// Lookups that miss are not errors; they come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Track creation referenced an artist that does not exist
    #[error("Artist with ID {0} not found")]
    UnknownArtist(ArtistId),
}

/// Result type for catalog writes
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type for process-level operations (bind, serve, seeding)
pub type ServerResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

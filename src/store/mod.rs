//! In-memory stores
//!
//! Each store is a plain owned value with no locking of its own; the
//! [`Catalog`](crate::catalog::Catalog) wraps every store in its own lock and
//! implements the operations that span several stores.

mod artists;
mod events;
mod tracks;

pub use artists::ArtistStore;
pub use events::EventLog;
pub use tracks::TrackStore;

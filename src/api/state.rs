//! Shared application state

use std::sync::Arc;

use crate::catalog::Catalog;

/// State handed to every handler
pub struct AppState {
    /// The catalog; each store inside carries its own lock
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

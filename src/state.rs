//! Shared application state
//!
//! Everything reachable from `AppState` is immutable and `'static`, so
//! cloning it per request is free and handlers never lock.

use crate::catalog::Catalog;

/// Shared application state for the lookup endpoints
#[derive(Clone, Copy, Debug)]
pub struct AppState {
    pub catalog: &'static Catalog,
}

impl AppState {
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::global())
    }
}

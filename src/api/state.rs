//! Application state for the Attendance Reconciliation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use super::store::{InMemoryResultStore, ResultStore};

/// Shared application state.
///
/// Carries the injected result store that holds computed reports for later
/// CSV download.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ResultStore>,
}

impl AppState {
    /// Creates application state around an injected result store.
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self { store }
    }

    /// Creates application state backed by the default in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryResultStore::default()))
    }

    /// Returns the result store.
    pub fn store(&self) -> &dyn ResultStore {
        self.store.as_ref()
    }
}

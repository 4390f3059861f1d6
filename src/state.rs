//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the submission store handle; the store's writer task owns the
//! file, so handlers never touch the disk for mutations directly.

use crate::services::store::SubmissionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store handle is Arc-backed.
#[derive(Clone)]
pub struct AppState {
    pub store: SubmissionStore,
}

impl AppState {
    #[must_use]
    pub fn new(store: SubmissionStore) -> Self {
        Self { store }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

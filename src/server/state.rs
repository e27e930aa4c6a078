//! Shared application state injected into every Axum handler.

use crate::journal::PaymentJournal;

/// Application state shared across all request handlers.
///
/// The journal handle is cheaply cloneable (`Arc`-backed), so Axum can clone
/// the state for each request without copying anything expensive.
#[derive(Clone)]
pub struct AppState {
    /// Journal that receives one line per accepted notification.
    pub journal: PaymentJournal,
}

impl AppState {
    /// Create a new [`AppState`] over the provided journal.
    pub fn new(journal: PaymentJournal) -> Self {
        Self { journal }
    }
}

impl Default for AppState {
    /// Creates an [`AppState`] over an in-memory journal, suitable for tests.
    fn default() -> Self {
        Self::new(PaymentJournal::in_memory())
    }
}

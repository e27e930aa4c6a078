//! Axum request handlers.

use axum::{extract::State, http::StatusCode};
use bytes::Bytes;
use tracing::{debug, warn};

use super::state::AppState;

/// `POST /payments` — accept a payment notification.
///
/// The [`Bytes`] extractor suspends until the body stream signals
/// end-of-stream, so the buffer is complete before anything is journalled.
/// The bytes are journalled verbatim; nothing is parsed or validated, and the
/// response is always an empty `204 No Content`.
pub async fn ingest(State(state): State<AppState>, body: Bytes) -> StatusCode {
    if let Err(e) = state.journal.record(&body) {
        // A failed journal write is not surfaced to the caller.
        warn!(error = %e, "failed to journal payment notification");
    }
    debug!(bytes = body.len(), "payment notification accepted");
    StatusCode::NO_CONTENT
}

/// Catch-all handler: every method/path other than `POST /payments` gets an
/// empty `404 Not Found`.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

//! Axum HTTP server: routing, handlers, shared state.
//!
//! # Responsibilities
//! - Define the router: `POST /payments` plus the empty-404 fallback.
//! - Accumulate each request body to end-of-stream before journalling it.
//! - Inject shared application state (`AppState`) into handlers.

pub mod handlers;
pub mod router;
pub mod state;

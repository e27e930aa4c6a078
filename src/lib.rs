//! Payment notification intake service.
//!
//! One HTTP listener: `POST /payments` accumulates the raw request body to
//! end-of-stream, appends one line to the payment journal on stdout, and
//! answers an empty `204 No Content`. Every other method/path combination
//! gets an empty `404 Not Found`. The body is never parsed and nothing is
//! persisted beyond the journal stream.

pub mod config;
pub mod journal;
pub mod protocol;
pub mod server;
pub mod telemetry;

pub use config::Config;
pub use journal::PaymentJournal;
pub use protocol::PaymentNotification;

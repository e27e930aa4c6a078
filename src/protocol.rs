//! Wire types for the payment notification API.

use serde::{Deserialize, Serialize};

/// Payment notification submitted as the body of `POST /payments`.
///
/// The intake service journals the raw body bytes without deserialising them;
/// this type documents the wire contract for producers and backs test
/// fixtures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotification {
    /// Opaque identifier correlating this notification with a payment event.
    /// UUID-formatted by convention; never validated here.
    pub correlation_id: String,

    /// Payment amount.
    pub amount: f64,

    /// ISO-8601 timestamp of when the payment was requested.
    pub requested_at: String,
}

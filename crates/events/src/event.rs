use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of an order lifecycle notification.
///
/// This enumeration is the extension point: new notifications get a new kind
/// here rather than a second channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderEventKind {
    /// An order was appended to the store.
    Created,
    /// An administrative confirmation for an order's payment.
    Confirmed,
}

impl OrderEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderEventKind::Created => "created",
            OrderEventKind::Confirmed => "confirmed",
        }
    }
}

/// An ephemeral order notification. Never persisted, never replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderEvent {
    #[serde(rename = "type")]
    pub kind: OrderEventKind,
    /// The triggering order (`created`) or a minimal confirmation payload
    /// (`confirmed`).
    pub payload: Value,
    /// Assigned at publish time.
    pub ts: DateTime<Utc>,
}

impl OrderEvent {
    pub fn created(payload: Value, ts: DateTime<Utc>) -> Self {
        Self {
            kind: OrderEventKind::Created,
            payload,
            ts,
        }
    }

    pub fn confirmed(payload: Value, ts: DateTime<Utc>) -> Self {
        Self {
            kind: OrderEventKind::Confirmed,
            payload,
            ts,
        }
    }
}

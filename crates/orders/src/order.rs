use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A submitted order as held by the store.
///
/// The line items are opaque at this layer: whatever the customer's client
/// sent is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,

    /// Assigned by the store at append time, never by the caller.
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub customer: String,

    #[serde(rename = "type", default)]
    pub order_type: String,

    #[serde(default = "empty_items")]
    pub items: Value,

    #[serde(default)]
    pub total: f64,

    pub status: String,

    /// Payment correlation, filled in by the payment collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_key: Option<String>,

    /// External order id used by the payment provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

fn empty_items() -> Value {
    Value::Array(Vec::new())
}

/// Caller-supplied order payload.
///
/// Everything is optional: the store fills identifiers, timestamps and the
/// `pending` status itself, and stricter validation is deliberately left to
/// calling collaborators.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub id: Option<String>,
    pub customer: Option<String>,
    #[serde(rename = "type")]
    pub order_type: Option<String>,
    pub items: Option<Value>,
    pub total: Option<f64>,
    pub status: Option<String>,
    pub payment_key: Option<String>,
    pub order_id: Option<String>,
}

impl OrderDraft {
    /// Materialize the stored order with store-assigned id and timestamp.
    pub(crate) fn into_order(self, id: String, created_at: DateTime<Utc>) -> Order {
        Order {
            id,
            created_at,
            customer: self.customer.unwrap_or_default(),
            order_type: self.order_type.unwrap_or_default(),
            items: self.items.unwrap_or_else(empty_items),
            total: self.total.unwrap_or_default(),
            status: self.status.unwrap_or_else(|| "pending".to_string()),
            payment_key: self.payment_key,
            order_id: self.order_id,
        }
    }
}

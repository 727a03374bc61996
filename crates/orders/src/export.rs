//! Tabular export adapter.
//!
//! The spreadsheet encoding itself lives with the transport; this module
//! flattens orders into rows. Line items are deliberately embedded as one
//! serialized string field rather than expanded into separate rows.

use serde::Serialize;

use crate::Order;

/// One flattened export row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderExportRow {
    pub id: String,
    pub created_at: String,
    pub customer: String,
    #[serde(rename = "type")]
    pub order_type: String,
    /// Line items as a JSON string, one cell per order.
    pub items: String,
    pub total: f64,
    pub status: String,
    pub payment_key: String,
    pub order_id: String,
}

pub fn export_rows(orders: &[Order]) -> Vec<OrderExportRow> {
    orders
        .iter()
        .map(|o| OrderExportRow {
            id: o.id.clone(),
            created_at: o.created_at.to_rfc3339(),
            customer: o.customer.clone(),
            order_type: o.order_type.clone(),
            items: serde_json::to_string(&o.items).unwrap_or_else(|_| "[]".to_string()),
            total: o.total,
            status: o.status.clone(),
            payment_key: o.payment_key.clone().unwrap_or_default(),
            order_id: o.order_id.clone().unwrap_or_default(),
        })
        .collect()
}

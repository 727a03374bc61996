//! Bulk import adapter.
//!
//! The spreadsheet parsing itself lives with the transport; this module takes
//! the already-parsed row set and turns it into store inserts.

use serde::Deserialize;

use crate::MenuItem;

/// One parsed import row. Missing cells arrive as their defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub cat: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// How an import interacts with the existing menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Discard the prior menu entirely.
    Replace,
    /// Keep the prior menu; skip rows whose id already exists.
    Append,
}

/// Filter and normalize rows into insertable items.
///
/// Rows missing id or name, or with a non-positive price, are silently
/// dropped. A duplicate id within the row set keeps the first occurrence so
/// the store's uniqueness invariant holds.
pub fn sanitize_rows(rows: Vec<MenuRow>) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = Vec::new();
    for row in rows {
        if row.id.is_empty() || row.name.is_empty() {
            continue;
        }
        if !row.price.is_finite() || row.price <= 0.0 {
            continue;
        }
        if items.iter().any(|i| i.id == row.id) {
            continue;
        }
        items.push(MenuItem {
            id: row.id,
            name: row.name,
            price: row.price,
            cat: if row.cat.is_empty() {
                None
            } else {
                Some(row.cat)
            },
            active: row.active,
        });
    }
    items
}

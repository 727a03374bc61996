use serde::{Deserialize, Serialize};

use storefront_core::{StoreError, StoreResult};

/// A menu entry as held by the store.
///
/// Identifiers are free-form strings chosen by the administrator and unique
/// across the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cat: Option<String>,
    pub active: bool,
}

/// Caller-supplied fields for a create.
///
/// `price` is optional here so the store itself can report a missing price as
/// `InvalidInput` rather than leaving that check to every transport.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemDraft {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub price: Option<f64>,
    #[serde(default)]
    pub cat: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl MenuItemDraft {
    /// Validate required fields and produce the item to insert.
    pub fn into_item(self) -> StoreResult<MenuItem> {
        if self.id.is_empty() {
            return Err(StoreError::invalid_input("id required"));
        }
        if self.name.is_empty() {
            return Err(StoreError::invalid_input("name required"));
        }
        let price = self
            .price
            .ok_or_else(|| StoreError::invalid_input("price required"))?;
        if !price.is_finite() || price < 0.0 {
            return Err(StoreError::invalid_input(
                "price must be a non-negative number",
            ));
        }
        Ok(MenuItem {
            id: self.id,
            name: self.name,
            price,
            cat: self.cat,
            active: self.active,
        })
    }
}

/// Shallow-merge update: only supplied fields change.
///
/// Omitting a field leaves it untouched; the category is cleared by an
/// explicit `null` or empty string, never by omission. The double `Option`
/// keeps those wire shapes apart: outer `None` is "field absent", inner
/// `None` is "field sent as null".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub cat: Option<Option<String>>,
    pub active: Option<bool>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl MenuItemPatch {
    /// Apply the patch to an existing item.
    pub fn apply(self, item: &mut MenuItem) -> StoreResult<()> {
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(StoreError::invalid_input(
                    "price must be a non-negative number",
                ));
            }
            item.price = price;
        }
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(cat) = self.cat {
            item.cat = cat.filter(|c| !c.is_empty());
        }
        if let Some(active) = self.active {
            item.active = active;
        }
        Ok(())
    }
}

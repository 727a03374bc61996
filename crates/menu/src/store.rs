use std::sync::Mutex;

use storefront_core::{StoreError, StoreResult};

use crate::import::{sanitize_rows, ImportMode, MenuRow};
use crate::item::{MenuItem, MenuItemDraft, MenuItemPatch};

/// In-memory menu store.
///
/// Insertion order is preserved and `list()` snapshots it. The mutex makes
/// each operation atomic under the multi-threaded runtime; the identifier
/// uniqueness check and the insert happen under one lock acquisition.
#[derive(Debug, Default)]
pub struct MenuStore {
    items: Mutex<Vec<MenuItem>>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store (process start, e.g. from a bundled menu file).
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }

    /// Full current snapshot, in insertion order.
    pub fn list(&self) -> Vec<MenuItem> {
        self.lock().clone()
    }

    /// Insert a new item.
    ///
    /// Fails with `InvalidInput` on missing id/name/price and with `Conflict`
    /// when the identifier is already taken; the store is unchanged on error.
    pub fn create(&self, draft: MenuItemDraft) -> StoreResult<MenuItem> {
        let item = draft.into_item()?;
        let mut items = self.lock();
        if items.iter().any(|m| m.id == item.id) {
            return Err(StoreError::conflict(format!("duplicate id {}", item.id)));
        }
        items.push(item.clone());
        Ok(item)
    }

    /// Shallow-merge the supplied fields into the item with this identifier.
    pub fn update(&self, id: &str, patch: MenuItemPatch) -> StoreResult<MenuItem> {
        let mut items = self.lock();
        let item = items
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound)?;
        patch.apply(item)?;
        Ok(item.clone())
    }

    /// Remove the item with this identifier.
    ///
    /// Deleting a missing identifier is a no-op, matching administrative
    /// tooling ergonomics.
    pub fn delete(&self, id: &str) {
        self.lock().retain(|m| m.id != id);
    }

    /// Bulk import of a parsed row set. Returns the number of rows taken in.
    ///
    /// Fails with `InvalidInput` before touching the menu when no row
    /// survives filtering, so a bad file cannot wipe the menu in replace
    /// mode.
    pub fn import(&self, rows: Vec<MenuRow>, mode: ImportMode) -> StoreResult<usize> {
        let incoming = sanitize_rows(rows);
        if incoming.is_empty() {
            return Err(StoreError::invalid_input("no valid rows"));
        }
        let mut items = self.lock();
        match mode {
            ImportMode::Replace => {
                let count = incoming.len();
                *items = incoming;
                Ok(count)
            }
            ImportMode::Append => {
                let mut count = 0;
                for item in incoming {
                    if items.iter().any(|m| m.id == item.id) {
                        continue;
                    }
                    items.push(item);
                    count += 1;
                }
                Ok(count)
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<MenuItem>> {
        // Every critical section is a single push/assign/retain, so a
        // poisoned lock still guards a structurally valid list.
        self.items.lock().unwrap_or_else(|p| p.into_inner())
    }
}

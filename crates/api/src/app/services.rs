//! Process-owned service instances.
//!
//! The stores and the broadcaster are constructed exactly once here and
//! handed to handlers by reference; nothing reaches them through ambient
//! globals.

use std::path::Path;
use std::sync::Arc;

use storefront_core::{Clock, SystemClock};
use storefront_events::OrderBroadcaster;
use storefront_menu::{MenuItem, MenuStore};
use storefront_orders::OrderStore;

use crate::config::ApiConfig;

pub struct AppServices {
    pub menu: MenuStore,
    pub orders: OrderStore,
    pub events: OrderBroadcaster,
    pub clock: Arc<dyn Clock>,
}

pub fn build_services(config: &ApiConfig) -> AppServices {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let menu = match config.menu_file.as_deref() {
        Some(path) => MenuStore::with_items(load_menu(path)),
        None => MenuStore::new(),
    };

    AppServices {
        menu,
        orders: OrderStore::new(Arc::clone(&clock)),
        events: OrderBroadcaster::new(),
        clock,
    }
}

/// Best-effort menu seed; boots with an empty menu when the file is missing
/// or malformed.
fn load_menu(path: &Path) -> Vec<MenuItem> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "menu seed file unreadable; starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "menu seed file malformed; starting empty");
            Vec::new()
        }
    }
}

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use storefront_core::Clock;

use crate::order::{Order, OrderDraft};

/// Append-only in-memory order list.
///
/// `list()` reflects true arrival order: the append happens under one lock
/// acquisition, and the creation timestamp always comes from the injected
/// clock rather than the caller.
pub struct OrderStore {
    orders: Mutex<Vec<Order>>,
    /// Suffix for generated ids; wall-clock millis alone are not unique
    /// under rapid submissions or clock adjustments.
    seq: AtomicU64,
    clock: Arc<dyn Clock>,
}

impl OrderStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            seq: AtomicU64::new(0),
            clock,
        }
    }

    /// Append an order, assigning an id when the caller supplied none and
    /// always assigning the creation timestamp. Never fails.
    pub fn append(&self, draft: OrderDraft) -> Order {
        let now = self.clock.now();
        let id = match draft.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.next_id(now.timestamp_millis()),
        };

        let order = draft.into_order(id, now);
        let mut orders = self.lock();
        orders.push(order.clone());
        order
    }

    /// Full snapshot in append order.
    pub fn list(&self) -> Vec<Order> {
        self.lock().clone()
    }

    fn next_id(&self, millis: i64) -> String {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        format!("{millis}-{seq}")
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Order>> {
        self.orders.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl core::fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderStore")
            .field("orders", &self.lock().len())
            .finish()
    }
}

//! In-memory pub/sub hub for order events.
//!
//! - No IO in `publish`; sends are non-blocking
//! - Best-effort fan-out in registration order
//! - A stalled or torn-down subscriber never stalls the publisher or the
//!   other subscribers

use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_stream::Stream;

use crate::event::OrderEvent;

/// Handle identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

#[derive(Debug, Default)]
struct Shared {
    seq: AtomicU64,
    /// Registration order is delivery order.
    subscribers: Mutex<Vec<(SubscriberId, UnboundedSender<OrderEvent>)>>,
}

impl Shared {
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriberId, UnboundedSender<OrderEvent>)>> {
        self.subscribers.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn remove(&self, id: SubscriberId) {
        self.lock().retain(|(sid, _)| *sid != id);
    }
}

/// Single-topic order event hub.
///
/// Cloning is cheap and every clone publishes to and registers on the same
/// listener set; the composition root constructs one and hands it to whoever
/// publishes or subscribes.
#[derive(Debug, Clone, Default)]
pub struct OrderBroadcaster {
    shared: Arc<Shared>,
}

impl OrderBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    ///
    /// The subscription sees every event published after this call and
    /// nothing published before it.
    pub fn subscribe(&self) -> Subscription {
        let id = SubscriberId(self.shared.seq.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = mpsc::unbounded_channel();
        self.shared.lock().push((id, tx));
        Subscription {
            id,
            rx,
            shared: Arc::clone(&self.shared),
        }
    }

    /// Remove a listener. Safe to call repeatedly and after disconnect.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.shared.remove(id);
    }

    /// Deliver an event to every registered listener, in registration order.
    ///
    /// A delivery failure (receiver already gone) is swallowed: the failing
    /// listener is dropped from the set and the rest still receive the
    /// event. The whole fan-out runs under the set lock, so all listeners
    /// observe this event before any listener observes the next publish.
    pub fn publish(&self, event: OrderEvent) {
        let mut subs = self.shared.lock();
        let before = subs.len();
        subs.retain(|(_, tx)| tx.send(event.clone()).is_ok());
        let pruned = before - subs.len();
        if pruned > 0 {
            tracing::debug!(pruned, remaining = subs.len(), "pruned dead order event subscribers");
        }
    }

    /// Number of currently registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.shared.lock().len()
    }
}

/// A live registration on the hub.
///
/// Receives events until the hub side is torn down or the subscription is
/// dropped; dropping unregisters the listener, so an abandoned connection
/// cleans itself up without an explicit `unsubscribe` call.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    rx: UnboundedReceiver<OrderEvent>,
    shared: Arc<Shared>,
}

impl Subscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Wait for the next event. `None` once unsubscribed from the hub side.
    pub async fn recv(&mut self) -> Option<OrderEvent> {
        self.rx.recv().await
    }

    /// Non-blocking receive (tests, drain loops).
    pub fn try_recv(&mut self) -> Option<OrderEvent> {
        self.rx.try_recv().ok()
    }
}

impl Stream for Subscription {
    type Item = OrderEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.shared.remove(self.id);
    }
}

//! `storefront-events` — order event fan-out.
//!
//! A single-topic pub/sub hub that pushes order lifecycle events to live
//! subscribers. Delivery is best-effort: events are never persisted and a
//! late subscriber never sees history.

pub mod broadcaster;
pub mod event;

pub use broadcaster::{OrderBroadcaster, SubscriberId, Subscription};
pub use event::{OrderEvent, OrderEventKind};

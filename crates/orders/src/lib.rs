//! `storefront-orders` — append-only in-memory order list.
//!
//! Orders are immutable once appended; status changes belong to the payment
//! confirmation collaborator, not to this store. The export adapter flattens
//! the list for tabular export.

pub mod export;
pub mod order;
pub mod store;

pub use export::{export_rows, OrderExportRow};
pub use order::{Order, OrderDraft};
pub use store::OrderStore;

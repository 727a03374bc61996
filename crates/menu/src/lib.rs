//! `storefront-menu` — in-memory menu store.
//!
//! One insertion-ordered collection of menu items with CRUD operations and a
//! bulk import adapter. Mutations are expected to be called only after the
//! transport layer has passed the admin gate; reads are public.

pub mod import;
pub mod item;
pub mod store;

pub use import::{sanitize_rows, ImportMode, MenuRow};
pub use item::{MenuItem, MenuItemDraft, MenuItemPatch};
pub use store::MenuStore;

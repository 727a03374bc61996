//! `storefront-core` — foundation shared by the store crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error taxonomy every store operation reports through, and the clock
//! seam used wherever the stores assign timestamps.

pub mod clock;
pub mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{StoreError, StoreResult};

//! Map Module
//!
//! Bounded key/value storage with first-in-first-out eviction.

mod bounded;
mod order;
mod stats;
mod store;
mod table;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use bounded::BoundedMap;
pub use order::{OrderRecord, OrderTracker};
pub use stats::MapStats;
pub use store::{FifoStore, StoreReport, TRACKER_SLACK};
pub use table::{EntryTable, Slot};

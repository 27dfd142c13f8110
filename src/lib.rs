//! Circular Map - A bounded concurrent map with FIFO eviction
//!
//! When the map is full, storing a new key evicts the oldest surviving
//! entry first. Reads share a lock; writes take it exclusively.

pub mod config;
pub mod error;
pub mod map;

pub use config::MapConfig;
pub use error::{FaultReason, MapError, Result};
pub use map::{BoundedMap, MapStats};

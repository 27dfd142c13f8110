//! Error types for the bounded map
//!
//! Provides unified error handling using thiserror.

use std::fmt;

use thiserror::Error;

// == Fault Reason ==
/// Why the order tracker could not accept a new key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultReason {
    /// The map was at capacity but the tracker held no record to evict
    NothingToEvict,
    /// The tracker rejected the new record; the table write was rolled back
    TrackerFull,
}

impl fmt::Display for FaultReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultReason::NothingToEvict => f.write_str("no available entry to evict"),
            FaultReason::TrackerFull => f.write_str("order tracker is full"),
        }
    }
}

// == Map Error Enum ==
/// Error returned by [`BoundedMap::store`](crate::BoundedMap::store).
///
/// There is a single kind. It carries the key that could not be stored so
/// the caller can retry or drop it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError<K> {
    /// The order tracker could not record the key
    #[error("error adding entry {key:?}: {reason}")]
    CapacityFault { key: K, reason: FaultReason },
}

impl<K> MapError<K> {
    pub(crate) fn capacity_fault(key: K, reason: FaultReason) -> Self {
        MapError::CapacityFault { key, reason }
    }

    /// Returns the reason for the fault.
    pub fn reason(&self) -> FaultReason {
        match self {
            MapError::CapacityFault { reason, .. } => *reason,
        }
    }

    /// Consumes the error and hands back the rejected key.
    pub fn into_key(self) -> K {
        match self {
            MapError::CapacityFault { key, .. } => key,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for map operations.
pub type Result<T, K> = std::result::Result<T, MapError<K>>;

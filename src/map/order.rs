//! Order Tracker Module
//!
//! Bounded FIFO record of insertion order, used to pick eviction victims.

use std::collections::VecDeque;

// == Order Record ==
/// One insertion event: the key and the sequence number it was stored under.
///
/// A record is *current* while the table slot for `key` still carries `seq`.
/// Once the key is deleted or re-inserted the record goes stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord<K> {
    pub key: K,
    pub seq: u64,
}

impl<K> OrderRecord<K> {
    /// Creates a record for `key` stored under `seq`.
    pub fn new(key: K, seq: u64) -> Self {
        Self { key, seq }
    }
}

// == Order Tracker ==
/// Fixed-capacity ring of order records.
///
/// - Front = oldest insertion (next eviction candidate)
/// - Back = newest insertion
///
/// Both ends are accessed with try semantics: a full or empty tracker is
/// reported immediately, nothing ever waits.
#[derive(Debug)]
pub struct OrderTracker<K> {
    records: VecDeque<OrderRecord<K>>,
    capacity: usize,
}

impl<K> OrderTracker<K> {
    // == Constructor ==
    /// Creates an empty tracker that holds at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    // == Try Push ==
    /// Appends a record at the back.
    ///
    /// Returns the record back to the caller if the tracker is full.
    pub fn try_push(&mut self, record: OrderRecord<K>) -> Result<(), OrderRecord<K>> {
        if self.is_full() {
            return Err(record);
        }
        self.records.push_back(record);
        Ok(())
    }

    // == Try Pop ==
    /// Removes and returns the oldest record, or None if the tracker is empty.
    pub fn try_pop(&mut self) -> Option<OrderRecord<K>> {
        self.records.pop_front()
    }

    // == Retain ==
    /// Keeps only the records for which `keep` returns true, preserving order.
    ///
    /// Returns the number of records dropped.
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&OrderRecord<K>) -> bool,
    {
        let before = self.records.len();
        self.records.retain(keep);
        before - self.records.len()
    }

    // == Peek Oldest ==
    /// Returns the oldest record without removing it.
    pub fn peek_oldest(&self) -> Option<&OrderRecord<K>> {
        self.records.front()
    }

    // == Capacity ==
    /// Returns the maximum number of records.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // == Is Full ==
    /// Returns true when a push would be rejected.
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }
}

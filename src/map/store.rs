//! FIFO Store Module
//!
//! Unsynchronized core combining the entry table with the order tracker.

use std::borrow::Borrow;
use std::hash::Hash;

use crate::error::{FaultReason, MapError, Result};
use crate::map::{EntryTable, OrderRecord, OrderTracker};

// == Store Report ==
/// What a successful store did to the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreReport<K> {
    /// Key removed by FIFO eviction to make room, if any
    pub evicted: Option<K>,
    /// Stale order records discarded by eviction or compaction
    pub stale_skipped: usize,
    /// True if the key was already present and only its value changed
    pub replaced: bool,
}

impl<K> StoreReport<K> {
    fn new() -> Self {
        Self {
            evicted: None,
            stale_skipped: 0,
            replaced: false,
        }
    }
}

/// Order tracker capacity as a multiple of `max_entries`.
pub const TRACKER_SLACK: usize = 2;

// == FIFO Store ==
/// Bounded key/value storage with first-in-first-out eviction.
///
/// Every live key has exactly one current record in the tracker. Deleting a
/// key leaves its record behind as stale; eviction recognises it by the
/// sequence number and discards it instead of removing a live entry.
///
/// The tracker holds up to `2 * max_entries` records. Since at most
/// `max_entries` of them are current, a compaction of a full tracker drops at
/// least `max_entries` stale records, which keeps its cost amortized O(1).
#[derive(Debug)]
pub struct FifoStore<K, V> {
    /// Key-value storage
    table: EntryTable<K, V>,
    /// Insertion order
    order: OrderTracker<K>,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Sequence number for the next insertion
    next_seq: u64,
}

impl<K, V> FifoStore<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty store holding at most `max_entries` entries.
    ///
    /// A capacity of zero is accepted; every store into it fails with
    /// [`FaultReason::NothingToEvict`].
    pub fn new(max_entries: usize) -> Self {
        Self {
            table: EntryTable::with_capacity(max_entries),
            order: OrderTracker::with_capacity(max_entries.saturating_mul(TRACKER_SLACK)),
            max_entries,
            next_seq: 0,
        }
    }

    // == Store ==
    /// Stores a key-value pair.
    ///
    /// Overwriting an existing key replaces the value in place and keeps the
    /// key's original position in the eviction order. A new key first evicts
    /// the oldest live entry if the map is full.
    pub fn store(&mut self, key: K, value: V) -> Result<StoreReport<K>, K> {
        let mut report = StoreReport::new();

        if let Some(current) = self.table.get_mut(&key) {
            *current = value;
            report.replaced = true;
            return Ok(report);
        }

        // A full tracker with room in the table holds at least max_entries
        // stale records; drop them so eviction only runs on a full table.
        if self.order.is_full() && self.table.len() < self.max_entries {
            let table = &self.table;
            report.stale_skipped += self.order.retain(|r| table.is_current(&r.key, r.seq));
        }

        while self.table.len() >= self.max_entries {
            let Some(record) = self.order.try_pop() else {
                return Err(MapError::capacity_fault(key, FaultReason::NothingToEvict));
            };
            match self.table.remove_if_current(&record.key, record.seq) {
                Some(_) => report.evicted = Some(record.key),
                None => report.stale_skipped += 1,
            }
        }

        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);

        self.table.insert(key.clone(), value, seq);
        if let Err(record) = self.order.try_push(OrderRecord::new(key, seq)) {
            // Roll back so the table never holds an untracked key
            self.table.remove_if_current(&record.key, seq);
            return Err(MapError::capacity_fault(record.key, FaultReason::TrackerFull));
        }

        Ok(report)
    }

    // == Load ==
    /// Returns a reference to the value stored under `key`.
    pub fn load<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.get(key)
    }

    // == Delete ==
    /// Removes `key` from the table. No-op if absent.
    ///
    /// The order record stays in the tracker until eviction reaches it.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.remove(key)
    }

    // == Contains ==
    /// Returns true if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.contains_key(key)
    }

    // == Length ==
    /// Returns the live entry count.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    // == Is Empty ==
    /// Returns true if no entries are live.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    // == Capacity ==
    /// Returns the maximum number of live entries.
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    // == Tracked ==
    /// Number of order records held, stale ones included.
    pub fn tracked(&self) -> usize {
        self.order.len()
    }
}

//! Entry Table Module
//!
//! Key/value storage where every slot remembers the order record that owns it.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

// == Slot ==
/// A stored value plus the sequence number of its order record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<V> {
    pub value: V,
    pub seq: u64,
}

// == Entry Table ==
/// O(1) key/value table.
#[derive(Debug)]
pub struct EntryTable<K, V> {
    slots: HashMap<K, Slot<V>>,
}

impl<K, V> EntryTable<K, V>
where
    K: Eq + Hash,
{
    // == Constructor ==
    /// Creates an empty table with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: HashMap::with_capacity(capacity),
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, stamped with `seq`.
    ///
    /// Returns the previous slot if the key was already present.
    pub fn insert(&mut self, key: K, value: V, seq: u64) -> Option<Slot<V>> {
        self.slots.insert(key, Slot { value, seq })
    }

    // == Get ==
    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(key).map(|slot| &slot.value)
    }

    /// Returns the value stored under `key` for in-place update.
    ///
    /// The slot keeps its sequence number.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get_mut(key).map(|slot| &mut slot.value)
    }

    // == Contains ==
    /// Returns true if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(key)
    }

    // == Remove ==
    /// Removes a key unconditionally. No-op if absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.remove(key).map(|slot| slot.value)
    }

    // == Is Current ==
    /// Returns true if `key` is present and its slot was written under `seq`.
    pub fn is_current<Q>(&self, key: &Q, seq: u64) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(key).is_some_and(|slot| slot.seq == seq)
    }

    // == Remove If Current ==
    /// Removes `key` only if its slot was written under `seq`.
    ///
    /// A mismatch means the caller holds a stale order record; the live slot
    /// belongs to a later insertion and is left alone.
    pub fn remove_if_current<Q>(&mut self, key: &Q, seq: u64) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.is_current(key, seq) {
            self.remove(key)
        } else {
            None
        }
    }

    // == Length ==
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    // == Is Empty ==
    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

//! Bounded Map Module
//!
//! Thread-safe FIFO map: a [`FifoStore`] behind a reader-writer lock.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::config::MapConfig;
use crate::error::Result;
use crate::map::stats::StatsRecorder;
use crate::map::{FifoStore, MapStats};

// == Bounded Map ==
/// Concurrency-safe key/value map with a fixed capacity and FIFO eviction.
///
/// `store` and `delete` hold the exclusive lock for their whole duration,
/// `load` and the other reads hold the shared lock. Share it across threads
/// with `Arc<BoundedMap<K, V>>`.
///
/// # Example
/// ```
/// use circular_map::BoundedMap;
///
/// let map = BoundedMap::new(2);
/// map.store("a", 1).unwrap();
/// map.store("b", 2).unwrap();
/// map.store("c", 3).unwrap();
///
/// assert_eq!(map.load("a"), None);
/// assert_eq!(map.load("b"), Some(2));
/// assert_eq!(map.load("c"), Some(3));
/// ```
#[derive(Debug)]
pub struct BoundedMap<K, V> {
    /// Store guarded by the reader-writer lock
    inner: RwLock<FifoStore<K, V>>,
    /// Hit, miss, eviction and fault counters
    stats: StatsRecorder,
    /// Maximum number of entries, fixed at construction
    max_entries: usize,
}

impl<K, V> BoundedMap<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    // == Constructor ==
    /// Creates an empty map that holds at most `max_entries` entries.
    ///
    /// With `max_entries == 0` every [`store`](Self::store) fails with a
    /// capacity fault.
    pub fn new(max_entries: usize) -> Self {
        Self {
            inner: RwLock::new(FifoStore::new(max_entries)),
            stats: StatsRecorder::default(),
            max_entries,
        }
    }

    // == From Config ==
    /// Creates a map from configuration.
    pub fn from_config(config: &MapConfig) -> Self {
        info!("Creating bounded map with max_entries={}", config.max_entries);
        Self::new(config.max_entries)
    }

    // == Store ==
    /// Stores a key-value pair, evicting the oldest entry if the map is full.
    ///
    /// On a capacity fault the map is left unchanged and the key is returned
    /// inside the error.
    pub fn store(&self, key: K, value: V) -> Result<(), K> {
        let report = self.write().store(key, value);

        match report {
            Ok(report) => {
                if report.stale_skipped > 0 {
                    debug!("Discarded {} stale order records", report.stale_skipped);
                    self.stats.record_stale_skips(report.stale_skipped);
                }
                if let Some(evicted) = report.evicted {
                    debug!("Evicted oldest entry {:?}", evicted);
                    self.stats.record_eviction();
                }
                Ok(())
            }
            Err(err) => {
                warn!("Store rejected: {}", err);
                self.stats.record_fault();
                Err(err)
            }
        }
    }

    // == Delete ==
    /// Removes `key` if present. Deleting an absent key is a no-op.
    pub fn delete<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        // The value is dropped after the lock is released
        let _removed = self.write().delete(key);
    }

    // == Contains ==
    /// Returns true if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read().contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the map.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    // == Is Empty ==
    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // == Capacity ==
    /// Returns the configured maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    // == Stats ==
    /// Returns current map statistics.
    pub fn stats(&self) -> MapStats {
        let len = self.read().len();
        self.stats.snapshot(len, self.max_entries)
    }

    fn read(&self) -> RwLockReadGuard<'_, FifoStore<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FifoStore<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> BoundedMap<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    // == Load ==
    /// Returns a copy of the value stored under `key`, or None if absent.
    pub fn load<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.read().load(key).cloned();
        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }
}

impl<K, V> Default for BoundedMap<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::from_config(&MapConfig::default())
    }
}

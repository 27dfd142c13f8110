//! Map Statistics Module
//!
//! Tracks lookup hits and misses, evictions and capacity faults.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Map Stats ==
/// Point-in-time snapshot of map counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapStats {
    /// Number of loads that found their key
    pub hits: u64,
    /// Number of loads that did not find their key
    pub misses: u64,
    /// Number of live entries removed by FIFO eviction
    pub evictions: u64,
    /// Number of stale order records discarded by eviction or compaction
    pub stale_skips: u64,
    /// Number of stores rejected with a capacity fault
    pub faults: u64,
    /// Current number of entries in the map
    pub total_entries: usize,
    /// Configured capacity
    pub max_entries: usize,
}

impl MapStats {
    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no loads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Stats Recorder ==
/// Counters shared by readers and writers.
///
/// Loads only hold the shared lock, so every counter is atomic.
#[derive(Debug, Default)]
pub(crate) struct StatsRecorder {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    stale_skips: AtomicU64,
    faults: AtomicU64,
}

impl StatsRecorder {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale_skips(&self, count: usize) {
        if count > 0 {
            self.stale_skips.fetch_add(count as u64, Ordering::Relaxed);
        }
    }

    pub fn record_fault(&self) {
        self.faults.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    pub fn snapshot(&self, total_entries: usize, max_entries: usize) -> MapStats {
        MapStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            stale_skips: self.stale_skips.load(Ordering::Relaxed),
            faults: self.faults.load(Ordering::Relaxed),
            total_entries,
            max_entries,
        }
    }
}

//! Cache Statistics Module
//!
//! Tracks read outcomes and the work done by both eviction paths.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of reads that found a live entry
    pub hits: u64,
    /// Number of reads for keys that were not present
    pub misses: u64,
    /// Number of reads that found an expired entry and evicted it
    pub expired: u64,
    /// Number of entries removed by the background sweeper
    pub swept: u64,
    /// Number of completed sweeper ticks
    pub sweeps: u64,
    /// Current number of entries in the cache, expired-but-unswept included
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Expired reads count against the rate like misses. Returns 0.0 if no
    /// reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses + self.expired;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Expired ==
    /// Counts one lazy eviction.
    pub fn record_expired(&mut self) {
        self.expired += 1;
    }

    // == Record Sweep ==
    /// Counts one sweeper tick and the entries it removed.
    pub fn record_sweep(&mut self, removed: usize) {
        self.sweeps += 1;
        self.swept += removed as u64;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

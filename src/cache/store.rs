//! Cache Store Module
//!
//! Unsynchronised cache engine: HashMap storage with per-entry expiry.
//! [`ExpiringCache`](crate::ExpiringCache) wraps it in a lock shared with the
//! sweeper.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::cache::{CacheEntry, CacheStats, Lookup};

// == Cache Store ==
/// Main cache storage with TTL support.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash,
{
    // == Constructor ==
    /// Creates a new empty CacheStore.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new CacheStore pre-sized for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores a value that expires `lifetime` from now.
    ///
    /// If the key already exists, its entry is replaced wholesale: new value
    /// and new expiry.
    pub fn set(&mut self, key: K, value: V, lifetime: Duration) {
        self.entries.insert(key, CacheEntry::new(value, lifetime));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Expired entries are removed on the spot and their stale value is
    /// returned as [`Lookup::Expired`].
    pub fn get<Q>(&mut self, key: &Q) -> Lookup<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return Lookup::Miss;
        };

        if !entry.is_expired() {
            let value = entry.value.clone();
            self.stats.record_hit();
            return Lookup::Hit(value);
        }

        match self.entries.remove(key) {
            Some(entry) => {
                trace!("Lazily evicted expired entry");
                self.stats.record_expired();
                Lookup::Expired(entry.value)
            }
            None => Lookup::Miss,
        }
    }

    // == Delete ==
    /// Removes an entry by key. Absent keys are a no-op.
    pub fn delete<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key);
    }

    // == Purge Expired ==
    /// Removes every expired entry in a single pass.
    ///
    /// All entries are judged against the same instant. Returns the number
    /// of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        let removed = before - self.entries.len();
        self.stats.record_sweep(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of stored entries, expired-but-unswept included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for CacheStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

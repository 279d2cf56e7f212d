//! Expiring Cache Module
//!
//! Thread-safe front of the cache: one lock around the store, shared with a
//! sweeper that lives exactly as long as the cache.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::cache::{CacheStats, CacheStore, Lookup};
use crate::config::Config;
use crate::error::Result;
use crate::tasks::{spawn_sweeper, SweeperHandle};

// == Expiring Cache ==
/// Generic key-value cache where every entry carries its own time-to-live.
///
/// Expired entries are evicted lazily when read and eagerly by a background
/// sweeper that runs every second. All operations, including each sweep,
/// serialise on a single lock.
///
/// Dropping the cache stops the sweeper and waits for it to exit. Share a
/// cache between threads by wrapping it in an [`Arc`].
///
/// ```
/// use std::time::Duration;
/// use expiring_cache::{ExpiringCache, Lookup};
///
/// let cache = ExpiringCache::new();
/// cache.set("session", 42, Duration::from_secs(30));
///
/// assert_eq!(cache.get("session"), Lookup::Hit(42));
/// assert_eq!(cache.get("other"), Lookup::Miss);
/// ```
pub struct ExpiringCache<K, V> {
    store: Arc<Mutex<CacheStore<K, V>>>,
    _sweeper: SweeperHandle,
}

impl<K, V> ExpiringCache<K, V>
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
{
    // == Constructors ==
    /// Creates an empty cache and starts its sweeper.
    ///
    /// # Panics
    /// Panics if the OS cannot spawn the sweeper thread, like
    /// [`std::thread::spawn`]. Use [`try_new`](Self::try_new) to handle it.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty cache from `config` and starts its sweeper.
    ///
    /// # Panics
    /// Panics if the sweeper cannot be started; see
    /// [`try_with_config`](Self::try_with_config).
    pub fn with_config(config: Config) -> Self {
        match Self::try_with_config(config) {
            Ok(cache) => cache,
            Err(err) => panic!("{}", err),
        }
    }

    /// Fallible form of [`new`](Self::new).
    pub fn try_new() -> Result<Self> {
        Self::try_with_config(Config::default())
    }

    /// Fallible form of [`with_config`](Self::with_config).
    ///
    /// Fails with [`CacheError::SweeperSpawn`](crate::CacheError::SweeperSpawn)
    /// if the sweeper cannot be started, including when
    /// [`Config::sweeper_name`] contains a NUL byte.
    pub fn try_with_config(config: Config) -> Result<Self> {
        let store = Arc::new(Mutex::new(CacheStore::with_capacity(
            config.initial_capacity,
        )));
        let sweeper = spawn_sweeper(Arc::clone(&store), &config.sweeper_name)?;

        Ok(Self {
            store,
            _sweeper: sweeper,
        })
    }
}

impl<K, V> ExpiringCache<K, V>
where
    K: Eq + Hash,
{
    // == Set ==
    /// Inserts or replaces the entry for `key`, expiring `lifetime` from now.
    ///
    /// A zero lifetime stores an already-expired entry; it is dropped by the
    /// next read or sweep.
    pub fn set(&self, key: K, value: V, lifetime: Duration) {
        self.store.lock().set(key, value, lifetime);
    }

    // == Get ==
    /// Looks up `key`, evicting it if it has expired.
    ///
    /// An expired entry yields [`Lookup::Expired`] carrying the stale value;
    /// only [`Lookup::Hit`] reports `found() == true`.
    pub fn get<Q>(&self, key: &Q) -> Lookup<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.store.lock().get(key)
    }

    // == Delete ==
    /// Removes the entry for `key`, if any.
    pub fn delete<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.lock().delete(key);
    }

    // == Inspection ==
    /// Returns the number of stored entries, including expired entries that
    /// have not been read or swept yet.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    // == Is Empty ==
    /// Returns true if no entries are stored, expired or not.
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }
}

impl<K, V> Default for ExpiringCache<K, V>
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for ExpiringCache<K, V>
where
    K: Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    use crate::error::CacheError;
    use crate::tasks::SWEEP_INTERVAL;

    #[test]
    fn test_cache_set_and_get() {
        let cache = ExpiringCache::new();
        cache.set("key".to_string(), vec![1, 2, 3], Duration::from_secs(10));

        assert_eq!(cache.get("key"), Lookup::Hit(vec![1, 2, 3]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_returned_value_is_a_copy() {
        let cache = ExpiringCache::new();
        cache.set("key", vec![1], Duration::from_secs(10));

        let mut copy = cache.get("key").into_fresh().unwrap();
        copy.push(2);

        assert_eq!(cache.get("key"), Lookup::Hit(vec![1]));
    }

    #[test]
    fn test_cache_delete_is_idempotent() {
        let cache = ExpiringCache::new();
        cache.set(1u32, "one", Duration::from_secs(10));

        cache.delete(&1);
        cache.delete(&1);
        cache.delete(&2);

        assert!(cache.is_empty());
        assert_eq!(cache.get(&1), Lookup::Miss);
    }

    #[test]
    fn test_cache_with_config() {
        let config = Config::default()
            .with_initial_capacity(16)
            .with_sweeper_name("config-test-sweeper");
        let cache = ExpiringCache::try_with_config(config).unwrap();

        cache.set("a", 1, Duration::from_secs(1));
        assert!(cache.get("a").found());
    }

    #[test]
    fn test_try_with_config_reports_invalid_sweeper_name() {
        let config = Config::default().with_sweeper_name("bad\0name");

        let result = ExpiringCache::<u32, u32>::try_with_config(config);

        match result {
            Err(CacheError::SweeperSpawn(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput)
            }
            other => panic!("Expected a spawn error, got {:?}", other),
        }
    }

    #[test]
    fn test_cache_sweeps_unread_entries() {
        let cache = ExpiringCache::new();
        cache.set("unread", "value", Duration::from_millis(1));
        assert_eq!(cache.len(), 1);

        sleep(SWEEP_INTERVAL + Duration::from_millis(500));

        assert_eq!(cache.len(), 0);
        let stats = cache.stats();
        assert_eq!(stats.swept, 1);
        assert_eq!(stats.expired, 0);
    }

    #[test]
    fn test_cache_drop_stops_sweeper() {
        let cache: ExpiringCache<String, String> = ExpiringCache::new();
        let store = Arc::clone(&cache.store);
        assert_eq!(Arc::strong_count(&store), 3);

        drop(cache);

        assert_eq!(Arc::strong_count(&store), 1);
    }

    #[test]
    fn test_cache_debug() {
        let cache = ExpiringCache::new();
        cache.set("a", 1, Duration::from_secs(10));
        assert!(format!("{:?}", cache).contains("entries: 1"));
    }
}

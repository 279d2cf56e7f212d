//! Lookup Result Module
//!
//! The outcome of a cache read. Absence and expiry are both "not found", but
//! an expired read still hands back the evicted value.

// == Lookup ==
/// Result of [`ExpiringCache::get`](crate::ExpiringCache::get).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<V> {
    /// The key was present and its entry still alive
    Hit(V),
    /// The key was present but expired; the entry has been removed and its
    /// stale value is returned alongside a negative found flag
    Expired(V),
    /// The key was not present
    Miss,
}

impl<V> Lookup<V> {
    /// Returns true only for a live hit.
    pub fn found(&self) -> bool {
        matches!(self, Lookup::Hit(_))
    }

    /// Returns the value of a live hit, discarding stale values.
    pub fn into_fresh(self) -> Option<V> {
        match self {
            Lookup::Hit(value) => Some(value),
            Lookup::Expired(_) | Lookup::Miss => None,
        }
    }

    /// Returns whatever value the read produced, stale or not.
    ///
    /// Check [`found`](Self::found) before trusting it.
    pub fn into_inner(self) -> Option<V> {
        match self {
            Lookup::Hit(value) | Lookup::Expired(value) => Some(value),
            Lookup::Miss => None,
        }
    }

    /// Splits into the `(value, found)` pair, with `V::default()` on a miss.
    pub fn into_pair(self) -> (V, bool)
    where
        V: Default,
    {
        match self {
            Lookup::Hit(value) => (value, true),
            Lookup::Expired(value) => (value, false),
            Lookup::Miss => (V::default(), false),
        }
    }
}
